//! Demo binary
//!
//! Drives the sample flows through a scripted navigation session and
//! prints the scene after each step. Run with `RUST_LOG=debug` to see
//! the coordinator's transition logging.

use tracing_subscriber::EnvFilter;

use nav_core::{Dismissal, Presentation};
use nav_host::flows::{LoginFlow, MainFlow};
use nav_host::NavHost;

fn main() -> serde_json::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let main_flow = NavHost::new(MainFlow::Root);
    let nav = main_flow.navigator();

    print_scene("mounted", &main_flow)?;

    nav.push(MainFlow::SignUp, Presentation::Stacked);
    print_scene("pushed sign-up", &main_flow)?;

    nav.push(
        MainFlow::Login {
            title: "Login".to_string(),
        },
        Presentation::Sheet,
    );
    print_scene("presented login sheet", &main_flow)?;

    // The login destination mounts its own flow with an independent
    // coordinator; navigating it leaves the main flow untouched.
    let login_flow = NavHost::new(LoginFlow::Root {
        title: "Login".to_string(),
    });
    login_flow
        .navigator()
        .push(LoginFlow::ForgotPassword, Presentation::FullScreenCover);
    print_scene("nested login flow", &login_flow)?;

    login_flow.dismiss_full_screen_cover();
    main_flow.dismiss_sheet();
    print_scene("sheet dismissed by gesture", &main_flow)?;

    nav.pop(Dismissal::default());
    nav.pop_to_root();
    print_scene("back at root", &main_flow)?;

    Ok(())
}

fn print_scene<P>(step: &str, host: &NavHost<P>) -> serde_json::Result<()>
where
    P: nav_core::Page + nav_host::Render,
    P::View: serde::Serialize,
{
    println!("--- {step}");
    println!("{}", serde_json::to_string_pretty(&host.scene())?);
    Ok(())
}
