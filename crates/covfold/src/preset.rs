//! Built-in feature presets
//!
//! Each preset bundles the filter, title and count source used for one
//! area of the app under test.

use crate::filter::{InclusionFilter, InclusionFilterBuilder};
use crate::lcov::CountSource;
use crate::result::{CovfoldError, CovfoldResult};

/// Generated code, widgets and views are not counted for the profile goal
const PROFILE_EXCLUDE: &[&str] = &[
    r"\.g\.dart$",
    r"view\.screens",
    r"_widget\.dart$",
    r"widgets/",
    r"/view/",
    r"shared\.dart$",
    r"shared_tweet_components\.dart$",
];

const GENERATED: &[&str] = &["_test.dart", ".g.dart", ".freezed.dart"];

/// A top-level feature folder used to tag files in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureFolder {
    /// `features/media`
    Media,
    /// `features/profile`
    Profile,
    /// `features/trends`
    Trends,
    /// `features/settings`
    Settings,
}

impl FeatureFolder {
    /// All folders in tagging priority order
    pub const ALL: [Self; 4] = [Self::Media, Self::Profile, Self::Trends, Self::Settings];

    /// Path marker identifying the folder
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Media => "/features/media/",
            Self::Profile => "/features/profile/",
            Self::Trends => "/features/trends/",
            Self::Settings => "/features/settings/",
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Profile => "profile",
            Self::Trends => "trends",
            Self::Settings => "settings",
        }
    }

    /// Tag shown in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Media => "MEDIA",
            Self::Profile => "PROFILE",
            Self::Trends => "TRENDS",
            Self::Settings => "SETTINGS",
        }
    }

    /// First folder whose marker occurs in a normalized path
    #[must_use]
    pub fn classify(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| path.contains(f.marker()))
    }
}

/// Named filter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Profile logic only: no widgets, views or generated files
    Profile,
    /// Every non-generated profile file, widgets included
    ProfileAll,
    /// Media feature, counted from `LF`/`LH`
    Media,
    /// Settings feature without views and widgets, counted from `LF`/`LH`
    Settings,
    /// Media, profile, trends and settings together
    Features,
}

impl Preset {
    /// All presets
    pub const ALL: [Self; 5] = [
        Self::Profile,
        Self::ProfileAll,
        Self::Media,
        Self::Settings,
        Self::Features,
    ];

    /// Look up a preset by its command-line name
    ///
    /// # Errors
    ///
    /// Returns [`CovfoldError::UnknownPreset`] for unknown names.
    pub fn from_name(name: &str) -> CovfoldResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| CovfoldError::UnknownPreset {
                name: name.to_string(),
            })
    }

    /// Command-line name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::ProfileAll => "profile-all",
            Self::Media => "media",
            Self::Settings => "settings",
            Self::Features => "features",
        }
    }

    /// Report title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Profile => "Profile Feature Coverage (excluding widgets/views/generated)",
            Self::ProfileAll => "Total Profile Feature Coverage (including all files)",
            Self::Media => "Media Feature Coverage",
            Self::Settings => "Settings Feature Coverage",
            Self::Features => "Feature Coverage",
        }
    }

    /// One-line description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Profile => "profile logic, excluding widgets, views and generated code",
            Self::ProfileAll => "every profile file except tests and generated code",
            Self::Media => "media feature, using LF/LH summary counts",
            Self::Settings => "settings logic without views/widgets, using LF/LH counts",
            Self::Features => "media, profile, trends and settings features",
        }
    }

    /// Where found/hit counts come from
    #[must_use]
    pub const fn count_source(self) -> CountSource {
        match self {
            Self::Media | Self::Settings => CountSource::Summary,
            Self::Profile | Self::ProfileAll | Self::Features => CountSource::Entries,
        }
    }

    /// Filter builder preloaded with the preset rules
    ///
    /// Callers may extend it before building.
    #[must_use]
    pub fn builder(self) -> InclusionFilterBuilder {
        let builder = InclusionFilter::builder();
        match self {
            Self::Profile => PROFILE_EXCLUDE
                .iter()
                .fold(builder.require("features/profile"), |b, p| b.exclude_regex(*p)),
            Self::ProfileAll => GENERATED
                .iter()
                .fold(builder.require("lib/features/profile/"), |b, s| b.exclude(s)),
            Self::Media => builder.require("lib/features/media"),
            Self::Settings => ["view.dart", "widget", ".g.dart", ".freezed.dart"]
                .iter()
                .fold(builder.require("lib/features/settings"), |b, s| b.exclude(s)),
            Self::Features => {
                let builder = FeatureFolder::ALL
                    .iter()
                    .fold(builder, |b, f| b.require(f.marker()));
                GENERATED.iter().fold(builder, |b, s| b.exclude(s))
            }
        }
    }

    /// Compiled filter for the preset
    ///
    /// # Errors
    ///
    /// Only fails if a built-in pattern is invalid.
    pub fn filter(self) -> CovfoldResult<InclusionFilter> {
        self.builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()).unwrap(), preset);
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(matches!(
            Preset::from_name("trends-only"),
            Err(CovfoldError::UnknownPreset { .. })
        ));
    }

    #[test]
    fn test_all_presets_compile() {
        for preset in Preset::ALL {
            assert!(preset.filter().is_ok(), "{} failed", preset.name());
        }
    }

    #[test]
    fn test_profile_excludes_ui() {
        let filter = Preset::Profile.filter().unwrap();
        assert!(filter.include("lib/features/profile/controllers/bio_controller.dart"));
        assert!(filter.include(r"lib\features\profile\repository.dart"));
        assert!(!filter.include("lib/features/profile/widgets/avatar.dart"));
        assert!(!filter.include("lib/features/profile/view/profile_page.dart"));
        assert!(!filter.include("lib/features/profile/models/user.g.dart"));
        assert!(!filter.include("lib/features/profile/shared.dart"));
        assert!(!filter.include("lib/features/media/player.dart"));
    }

    #[test]
    fn test_profile_all_keeps_widgets() {
        let filter = Preset::ProfileAll.filter().unwrap();
        assert!(filter.include("lib/features/profile/widgets/avatar.dart"));
        assert!(!filter.include("lib/features/profile/models/user.freezed.dart"));
    }

    #[test]
    fn test_settings_excludes_views() {
        let filter = Preset::Settings.filter().unwrap();
        assert!(filter.include("lib/features/settings/settings_repository.dart"));
        assert!(!filter.include("lib/features/settings/settings_view.dart"));
        assert!(!filter.include("lib/features/settings/widgets/toggle.dart"));
    }

    #[test]
    fn test_features_covers_four_folders() {
        let filter = Preset::Features.filter().unwrap();
        for folder in FeatureFolder::ALL {
            let path = format!("app/lib{}file.dart", folder.marker());
            assert!(filter.include(&path), "{path}");
        }
        assert!(!filter.include("app/lib/features/auth/login.dart"));
        assert!(!filter.include("app/lib/features/media/player_test.dart"));
    }

    #[test]
    fn test_count_sources() {
        assert_eq!(Preset::Media.count_source(), CountSource::Summary);
        assert_eq!(Preset::Settings.count_source(), CountSource::Summary);
        assert_eq!(Preset::Profile.count_source(), CountSource::Entries);
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            FeatureFolder::classify("lib/features/trends/list.dart"),
            Some(FeatureFolder::Trends)
        );
        assert_eq!(FeatureFolder::classify("lib/main.dart"), None);
        assert_eq!(FeatureFolder::Settings.label(), "SETTINGS");
        assert_eq!(FeatureFolder::Media.name(), "media");
    }
}
