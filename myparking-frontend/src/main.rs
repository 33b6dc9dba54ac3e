fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    if let Err(err) = myparking_frontend::run() {
        log::error!("Unable to start web application: {err}");
    }
}
