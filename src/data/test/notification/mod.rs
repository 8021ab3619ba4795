use crate::{data::notification::NotificationRepository, model::notification::CreateNotificationParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user_paginated;
mod mark_read;
