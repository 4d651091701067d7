use spectra_core::SpectraClient;

/// Path of the JSON API on the serving origin.
pub const API_PATH: &str = "/api/tunes";

/// API root: `SPECTRA_API_BASE` at build time, else the page's own origin.
pub fn api_base() -> String {
    if let Some(base) = option_env!("SPECTRA_API_BASE") {
        return base.to_string();
    }

    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    join_origin(&origin)
}

fn join_origin(origin: &str) -> String {
    format!("{}{API_PATH}", origin.trim_end_matches('/'))
}

pub fn client() -> SpectraClient {
    SpectraClient::new(api_base())
}
