use pakstage::PakstageError;

use crate::ui::ci::{github_actions_annotation, github_actions_enabled, AnnotationLevel};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

fn fix_hint(err: &PakstageError) -> Option<String> {
    match err {
        PakstageError::InvalidPackageList { .. } => Some(
            "Pass a JSON array of packages, or an object with a \"PackageList\" array.".to_string(),
        ),
        PakstageError::Json(_) => Some("Check that the input is valid JSON.".to_string()),
        PakstageError::InvalidConfig { file, .. } => Some(format!(
            "Correct the TOML in {}, or pass another file with --config.",
            file.display()
        )),
        PakstageError::Io(_) => None,
    }
}

pub fn format_error_with(
    err: &anyhow::Error,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("{:#}", err)).render(supports_color)
    );

    if let Some(fix) = err.downcast_ref::<PakstageError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {} FIX: {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            fix
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = detect_capabilities();
    if caps.is_ci && github_actions_enabled(|k| std::env::var(k).ok()) {
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &format!("{:#}", err),
                None,
                Some("pakstage"),
            )
        );
    }

    eprint!(
        "{}",
        format_error_with(err, caps.supports_color, caps.supports_unicode)
    );
}
