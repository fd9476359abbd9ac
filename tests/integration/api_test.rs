#![allow(dead_code)]

mod common;
mod conversations;
mod messages;
mod users;
