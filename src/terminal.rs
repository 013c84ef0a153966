//! Terminal size detection
//!
//! Used when no fixed column count is configured: content is wrapped at the
//! width of the terminal the tool runs in.

use std::env;

/// Column count used when no terminal width can be detected
pub const DEFAULT_COLUMNS: usize = 80;

/// Width of the terminal attached to stdout, if any
#[cfg(unix)]
pub fn terminal_columns() -> Option<usize> {
    use nix::libc;

    let mut ws: libc::winsize = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ only writes into the winsize we pass
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };
    if result == -1 || ws.ws_col == 0 {
        return None;
    }
    Some(ws.ws_col as usize)
}

#[cfg(not(unix))]
pub fn terminal_columns() -> Option<usize> {
    None
}

/// Terminal width, then `$COLUMNS`, then [`DEFAULT_COLUMNS`]
pub fn detect_columns() -> usize {
    terminal_columns()
        .or_else(|| {
            env::var("COLUMNS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .filter(|&cols: &usize| cols > 0)
        })
        .unwrap_or_else(|| {
            tracing::debug!("No terminal width detected, using {} columns", DEFAULT_COLUMNS);
            DEFAULT_COLUMNS
        })
}
