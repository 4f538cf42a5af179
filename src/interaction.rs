use url::Url;

/// Scroll offset is compared against section spans shifted up by this margin,
/// so a section becomes active shortly before its top edge reaches the
/// viewport top.
pub const SCROLL_LOOKAHEAD_PX: f64 = 200.0;

/// Fixed navbar height compensated for when scrolling to a section.
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0;

pub const SECTION_SELECTOR: &str = ".section";
pub const REVEALED_CLASS: &str = "animate-in";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

const ANIMATION_CLASSES: [&str; 4] = [
    "fade-in-up",
    "slide-in-left",
    "slide-in-right",
    "scale-in",
];

pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 7] = [
    NavLink { id: "profile", label: "Profile" },
    NavLink { id: "skills", label: "Skills" },
    NavLink { id: "works", label: "Works" },
    NavLink { id: "experience", label: "Experience" },
    NavLink { id: "education", label: "Education" },
    NavLink { id: "achievements", label: "Achievements" },
    NavLink { id: "contact", label: "Contact" },
];

/// Combined selector for every element the entry animator watches. A single
/// query keeps registration idempotent: an element that is both a section and
/// carries an animation class is matched once.
pub fn animated_selector() -> String {
    let mut parts = vec![SECTION_SELECTOR.to_string()];
    parts.extend(ANIMATION_CLASSES.iter().map(|class| format!(".{class}")));
    parts.join(", ")
}

/// One measured content section: id plus its vertical span at measurement
/// time. Spans are re-measured on every scroll event rather than cached.
#[derive(Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Classifies the active section for a scroll offset. A section matches when
/// the offset falls in `[top - margin, top + height - margin)`; when adjacent
/// lookahead windows overlap, the later section in document order wins.
pub fn active_section(scroll_y: f64, sections: &[SectionSpan]) -> Option<&str> {
    let mut current = None;

    for section in sections {
        let lower = section.top - SCROLL_LOOKAHEAD_PX;
        let upper = section.top + section.height - SCROLL_LOOKAHEAD_PX;

        if scroll_y >= lower && scroll_y < upper {
            current = Some(section.id.as_str());
        }
    }

    current
}

/// Per-target revealed flags for the entry animator, indexed by the target's
/// position in the observed element list. The transition is one-way: once a
/// target reveals, later intersection notifications report nothing new, so
/// scrolling away and back never re-triggers the animation.
pub struct RevealLedger {
    revealed: Vec<bool>,
}

impl RevealLedger {
    pub fn new(target_count: usize) -> Self {
        Self {
            revealed: vec![false; target_count],
        }
    }

    /// Marks a target revealed. Returns true only on the first call for that
    /// index; unknown indices are ignored.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

/// Resolves a media reference against the deployment path prefix so demo
/// assets keep working under subpath deployments. Absolute network URLs pass
/// through verbatim; anything else is joined to the prefix with exactly one
/// separator, whatever mix of leading/trailing slashes the inputs carry.
pub fn resolve_media_source(raw: &str, prefix: &str) -> String {
    let is_absolute = Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);

    if is_absolute {
        return raw.to_string();
    }

    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        raw.trim_start_matches('/')
    )
}

/// Video overlay state. `video_source: None` means closed; orientation is
/// only meaningful while a source is present and is re-derived per opened
/// video from its natural dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
    video_source: Option<String>,
    is_portrait: bool,
}

impl ModalState {
    pub fn closed() -> Self {
        Self {
            video_source: None,
            is_portrait: false,
        }
    }

    /// Opens the overlay on a resolved source, resetting orientation until
    /// the new video's metadata arrives.
    pub fn open(raw_source: &str, prefix: &str) -> Self {
        Self {
            video_source: Some(resolve_media_source(raw_source, prefix)),
            is_portrait: false,
        }
    }

    /// Applies natural dimensions reported by the player. Metadata for a
    /// source that is no longer the open one (closed meanwhile, or another
    /// video opened) is stale and dropped; the event source itself cannot be
    /// cancelled, so the guard lives here. Zero or missing height falls back
    /// to landscape.
    pub fn with_orientation(&self, source: &str, width: u32, height: u32) -> Self {
        if self.video_source.as_deref() != Some(source) {
            return self.clone();
        }

        Self {
            video_source: self.video_source.clone(),
            is_portrait: height > 0 && width < height,
        }
    }

    pub fn video_source(&self) -> Option<&str> {
        self.video_source.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.video_source.is_some()
    }

    pub fn is_portrait(&self) -> bool {
        self.is_portrait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(entries: &[(&str, f64, f64)]) -> Vec<SectionSpan> {
        entries
            .iter()
            .map(|(id, top, height)| SectionSpan {
                id: (*id).to_string(),
                top: *top,
                height: *height,
            })
            .collect()
    }

    #[test]
    fn no_sections_yields_no_active_section() {
        assert_eq!(active_section(500.0, &[]), None);
    }

    #[test]
    fn active_section_respects_lookahead_boundaries() {
        let sections = spans(&[("profile", 400.0, 600.0)]);

        // Inclusive at top - margin, exclusive at top + height - margin.
        assert_eq!(active_section(199.9, &sections), None);
        assert_eq!(active_section(200.0, &sections), Some("profile"));
        assert_eq!(active_section(799.9, &sections), Some("profile"));
        assert_eq!(active_section(800.0, &sections), None);
    }

    #[test]
    fn overlapping_windows_prefer_later_section() {
        // The second section's lookahead window opens before the first one
        // closes; document order decides.
        let sections = spans(&[("skills", 0.0, 500.0), ("works", 400.0, 500.0)]);

        assert_eq!(active_section(250.0, &sections), Some("works"));
        assert_eq!(active_section(100.0, &sections), Some("skills"));
    }

    #[test]
    fn scroll_past_all_sections_clears_active_state() {
        let sections = spans(&[("profile", 0.0, 400.0), ("contact", 400.0, 400.0)]);

        assert_eq!(active_section(5_000.0, &sections), None);
    }

    #[test]
    fn reveal_ledger_reveals_each_target_at_most_once() {
        let mut ledger = RevealLedger::new(2);

        assert!(ledger.reveal(0));
        assert!(!ledger.reveal(0));
        assert!(!ledger.reveal(0));
        assert!(ledger.reveal(1));
        assert!(!ledger.reveal(1));
    }

    #[test]
    fn reveal_ledger_ignores_out_of_range_targets() {
        let mut ledger = RevealLedger::new(1);

        assert!(!ledger.reveal(7));
        assert!(ledger.reveal(0));
    }

    #[test]
    fn absolute_urls_pass_through_untouched() {
        let source = "https://cdn.example.com/media/Demo.mp4";

        assert_eq!(resolve_media_source(source, "/app"), source);
    }

    #[test]
    fn relative_sources_join_prefix_with_single_separator() {
        assert_eq!(
            resolve_media_source("/media/Demo.mp4", "/app"),
            "/app/media/Demo.mp4"
        );
        assert_eq!(
            resolve_media_source("media/Demo.mp4", "/app"),
            "/app/media/Demo.mp4"
        );
        assert_eq!(
            resolve_media_source("media/Demo.mp4", "/app/"),
            "/app/media/Demo.mp4"
        );
        assert_eq!(resolve_media_source("/media/Demo.mp4", ""), "/media/Demo.mp4");
    }

    #[test]
    fn opening_a_video_resets_orientation() {
        let portrait = ModalState::open("/media/a.mp4", "").with_orientation("/media/a.mp4", 400, 800);
        assert!(portrait.is_portrait());

        let reopened = ModalState::open("/media/b.mp4", "");
        assert!(!reopened.is_portrait());
        assert_eq!(reopened.video_source(), Some("/media/b.mp4"));
    }

    #[test]
    fn orientation_follows_natural_dimensions() {
        let open = ModalState::open("/media/a.mp4", "");

        assert!(open.with_orientation("/media/a.mp4", 400, 800).is_portrait());
        assert!(!open.with_orientation("/media/a.mp4", 800, 400).is_portrait());
        // Square is not strictly narrower than tall.
        assert!(!open.with_orientation("/media/a.mp4", 600, 600).is_portrait());
        assert!(!open.with_orientation("/media/a.mp4", 600, 0).is_portrait());
    }

    #[test]
    fn stale_metadata_for_a_replaced_video_is_dropped() {
        // Open A, then B before A's metadata resolves; A's late portrait
        // dimensions must not leak into B's layout.
        let _first = ModalState::open("/media/a.mp4", "");
        let state = ModalState::open("/media/b.mp4", "");

        let after_stale = state.with_orientation("/media/a.mp4", 400, 800);
        assert!(!after_stale.is_portrait());

        let after_current = after_stale.with_orientation("/media/b.mp4", 800, 400);
        assert!(!after_current.is_portrait());
        assert_eq!(after_current.video_source(), Some("/media/b.mp4"));
    }

    #[test]
    fn metadata_after_close_is_a_no_op() {
        // Open, then close, then let the in-flight metadata event land.
        let _open = ModalState::open("/media/a.mp4", "");
        let closed = ModalState::closed();

        let after = closed.with_orientation("/media/a.mp4", 400, 800);
        assert!(!after.is_portrait());
        assert_eq!(after.video_source(), None);
    }

    #[test]
    fn every_close_path_converges_on_the_same_state() {
        // Close button, backdrop click, playback end, and Escape all replace
        // the state with `closed()`; verify that is a full reset.
        let open = ModalState::open("/media/a.mp4", "").with_orientation("/media/a.mp4", 400, 800);
        assert!(open.is_open());
        assert!(open.is_portrait());

        let closed = ModalState::closed();
        assert_eq!(closed.video_source(), None);
        assert!(!closed.is_portrait());
        assert_eq!(closed, ModalState::closed());
    }

    #[test]
    fn animated_selector_covers_sections_and_all_markers() {
        assert_eq!(
            animated_selector(),
            ".section, .fade-in-up, .slide-in-left, .slide-in-right, .scale-in"
        );
    }
}
