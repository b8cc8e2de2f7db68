//! Browser entry point: mounts [`portfolio::app::App`] onto `<body>`.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("portfolio app starting");
    leptos::mount::mount_to_body(portfolio::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The app only runs in the browser; native builds exist for tests.
}
