//! Live position of the device, for the walking estimate on the tracker.
//!
//! The watch runs in the webview through `document::eval`, so the same code
//! serves the browser and the desktop shell. Positions are pushed back with
//! `dioxus.send` and the watch is cleared when the hook's owner unmounts.

use dioxus::prelude::*;
use serde::Deserialize;
use store::GeoPoint;

const WATCH_POSITION_JS: &str = r#"
if (!("geolocation" in navigator)) {
    dioxus.send({ kind: "unsupported" });
} else {
    window.__canteenGeoWatch = navigator.geolocation.watchPosition(
        (pos) => dioxus.send({ kind: "position", lat: pos.coords.latitude, lon: pos.coords.longitude }),
        (err) => dioxus.send({ kind: "error", message: err.message }),
        { enableHighAccuracy: true, maximumAge: 10000, timeout: 15000 }
    );
}
"#;

const CLEAR_WATCH_JS: &str = r#"
if (window.__canteenGeoWatch !== undefined && "geolocation" in navigator) {
    navigator.geolocation.clearWatch(window.__canteenGeoWatch);
    window.__canteenGeoWatch = undefined;
}
"#;

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum GeoMessage {
    Position { lat: f64, lon: f64 },
    Error { message: String },
    Unsupported,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoState {
    pub position: Option<GeoPoint>,
    pub error: Option<String>,
}

pub fn use_geolocation() -> Signal<GeoState> {
    let mut geo = use_signal(GeoState::default);

    use_hook(|| {
        spawn(async move {
            let mut watch = document::eval(WATCH_POSITION_JS);
            loop {
                match watch.recv::<GeoMessage>().await {
                    Ok(GeoMessage::Position { lat, lon }) => geo.set(GeoState {
                        position: Some(GeoPoint::new(lat, lon)),
                        error: None,
                    }),
                    Ok(GeoMessage::Error { message }) => {
                        tracing::warn!("Geolocation error: {message}");
                        geo.write().error = Some(message);
                    }
                    Ok(GeoMessage::Unsupported) => {
                        geo.write().error =
                            Some("Geolocation is not supported by this browser".to_string());
                        break;
                    }
                    Err(e) => {
                        tracing::debug!("Geolocation channel closed: {e}");
                        break;
                    }
                }
            }
        })
    });

    use_drop(|| {
        document::eval(CLEAR_WATCH_JS);
    });

    geo
}
