use pile_core::{
    animation_delay_ms, grid_layout, Aspect, ConfigError, ConfigSnapshot, Photo, PileSession,
    ResponsiveWidths, Theme,
};
use serde::Serialize;

/// One photo of the pile, ready for a renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedPhoto {
    pub src: String,
    pub left: f64,
    pub top: f64,
    pub rotation: f64,
    pub z_index: i64,
    pub aspect: Aspect,
    pub delay_ms: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PileReport {
    pub theme: &'static str,
    pub seed: i64,
    pub pile_height_vh: f64,
    pub widths: ResponsiveWidths,
    pub sizes: String,
    pub photos: Vec<PlacedPhoto>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPhoto {
    pub src: String,
    pub rotation: f64,
    pub aspect: Aspect,
    pub delay_ms: f64,
}

/// Session setup gathered from the command line.
#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
    pub theme: Theme,
    pub snapshot: Option<ConfigSnapshot>,
    pub assignments: Vec<String>,
    pub seed: Option<i64>,
    pub reshuffles: u32,
}

/// Build a session the way the page would reach it: restore, tweak, reshuffle.
pub fn build_session(photo_count: usize, opts: &SessionOptions) -> Result<PileSession, ConfigError> {
    let mut session = PileSession::new(opts.theme, photo_count);
    if let Some(snapshot) = &opts.snapshot {
        session.restore(snapshot);
    }
    if let Some(seed) = opts.seed {
        session.restore(&ConfigSnapshot::new(session.params, seed));
    }
    for assignment in &opts.assignments {
        session.params.apply_assignment(assignment)?;
    }
    for _ in 0..opts.reshuffles {
        session.reshuffle();
    }
    Ok(session)
}

pub fn pile_report(photos: &[Photo], session: &PileSession) -> PileReport {
    let widths = session.widths();
    let placed = session
        .layout()
        .iter()
        .zip(photos)
        .enumerate()
        .map(|(i, (slot, photo))| PlacedPhoto {
            src: photo.src.clone(),
            left: slot.left,
            top: slot.top,
            rotation: slot.rotation_deg,
            z_index: session.stack_index(i, slot),
            aspect: slot.aspect,
            delay_ms: animation_delay_ms(i, session.params.stagger),
        })
        .collect();
    PileReport {
        theme: session.theme().name(),
        seed: session.seed(),
        pile_height_vh: session.pile_height_vh(),
        sizes: widths.sizes_attr(),
        widths,
        photos: placed,
    }
}

pub fn grid_report(photos: &[Photo]) -> Vec<GridPhoto> {
    grid_layout(photos.len())
        .into_iter()
        .zip(photos)
        .map(|(slot, photo)| GridPhoto {
            src: photo.src.clone(),
            rotation: slot.rotation_deg,
            aspect: slot.aspect,
            delay_ms: slot.delay_ms,
        })
        .collect()
}
