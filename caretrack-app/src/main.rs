#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    caretrack_app_lib::run()
}
