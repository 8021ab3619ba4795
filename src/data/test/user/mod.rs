use crate::data::user::UserRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::builder::TestBuilder;

mod admin_exists;
mod create;
mod find_by_email;
mod find_by_id;
