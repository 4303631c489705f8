//! Layout components shared across routes.

mod app_shell;
mod nav_menu;

pub(crate) use app_shell::AppShell;
