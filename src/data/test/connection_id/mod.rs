use crate::data::connection_id::ConnectionIdRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_connection_id;
mod find_by_user;
mod purge_all;
