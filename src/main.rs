//! Entry point: installs the panic hook, then boots the page behaviors.
//! A later `startWithConfig` call from page script is ignored.

fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    f1_dash_ui::start();
}
