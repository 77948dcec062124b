#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs of the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Upload,
    Models,
    Training,
    Users,
}

impl AdminTab {
    pub const ALL: [Self; 4] = [Self::Upload, Self::Models, Self::Training, Self::Users];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Upload => "Data Upload",
            Self::Models => "Models",
            Self::Training => "Model Training",
            Self::Users => "Users",
        }
    }
}

/// Dataset categories accepted by the upload screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DatasetKind {
    #[default]
    Lab,
    Pharmacy,
    Weather,
    SearchTrends,
}

impl DatasetKind {
    pub const ALL: [Self; 4] = [Self::Lab, Self::Pharmacy, Self::Weather, Self::SearchTrends];

    /// Wire token sent as the `dataset_type` upload field.
    pub const fn wire(self) -> &'static str {
        match self {
            Self::Lab => "LAB",
            Self::Pharmacy => "PHARMACY",
            Self::Weather => "WEATHER",
            Self::SearchTrends => "SEARCH_TRENDS",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lab => "Laboratory Data",
            Self::Pharmacy => "Pharmacy Sales",
            Self::Weather => "Weather Data",
            Self::SearchTrends => "Search Trends",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Lab => "Daily confirmed cases by disease",
            Self::Pharmacy => "Daily drug sales by category",
            Self::Weather => "Temperature, humidity, rainfall",
            Self::SearchTrends => "Search engine query trends",
        }
    }
}
