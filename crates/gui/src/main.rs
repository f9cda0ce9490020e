mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::geometry`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use meshstage_lib::geometry;
pub use meshstage_lib::import;
pub use meshstage_lib::state;

use std::path::PathBuf;

use app::MeshApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meshstage=info,meshstage_lib=info".into()),
        )
        .init();

    // Parse --import <path> argument
    let initial_import = parse_import_arg(std::env::args().skip(1));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mesh Stage")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "meshstage",
        native_options,
        Box::new(move |cc| Ok(Box::new(MeshApp::new(cc, initial_import)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_import_arg(mut args: impl Iterator<Item = String>) -> Option<PathBuf> {
    while let Some(arg) = args.next() {
        if arg == "--import" {
            let path = args.next();
            if path.is_none() {
                tracing::error!("--import needs a file path");
            }
            return path.map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_import_arg() {
        assert_eq!(
            parse_import_arg(args(&["--import", "cube.obj"])),
            Some(PathBuf::from("cube.obj"))
        );
        assert_eq!(parse_import_arg(args(&["--import"])), None);
        assert_eq!(parse_import_arg(args(&[])), None);
    }
}
