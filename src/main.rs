#![allow(warnings)]
//! EcoPantry Entry Point

mod api;
mod app;
mod components;
mod context;
mod eco;
mod models;
mod pantry;
mod recipes;
mod samples;
mod storage;
mod store;
mod waste;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
