//! Startup banner (HEALTH DESK) with a vertical color gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Mint (#3ddc97).
const MINT: (u8, u8, u8) = (0x3d, 0xdc, 0x97);
/// Clinic blue (#1e88e5).
const CLINIC_BLUE: (u8, u8, u8) = (0x1e, 0x88, 0xe5);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Renders the title with the standard figlet font; plain text if the font fails.
fn render_title() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("HEALTH DESK").map(|fig| fig.to_string()))
        .unwrap_or_else(|| "HEALTH DESK".to_string())
}

/// Prints the welcome banner, version and the not-a-diagnosis notice.
pub fn print_welcome() {
    let mut out = stdout();
    let art = render_title();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(MINT, CLINIC_BLUE, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: CLINIC_BLUE.0,
        g: CLINIC_BLUE.1,
        b: CLINIC_BLUE.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print(
        "Preliminary health information only. Not a diagnosis.\r\n",
    ));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints() {
        assert_eq!(lerp_rgb(MINT, CLINIC_BLUE, 0.0), MINT);
        assert_eq!(lerp_rgb(MINT, CLINIC_BLUE, 1.0), CLINIC_BLUE);
    }

    #[test]
    fn title_is_multiline_art() {
        assert!(render_title().lines().count() > 1);
    }
}
