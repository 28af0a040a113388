//! Side-by-side view of resolver capabilities.

use crate::resinfo::ResolverCapabilities;
use crate::ProbeReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    QnameMinimization,
    ExtendedErrors,
    InfoUrl,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::QnameMinimization,
        Feature::ExtendedErrors,
        Feature::InfoUrl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::QnameMinimization => "QNAME Minimization",
            Feature::ExtendedErrors => "Extended Errors",
            Feature::InfoUrl => "Info URL",
        }
    }

    /// Shown when a resolver returned no record to read the feature from.
    pub fn sentinel(&self) -> &'static str {
        match self {
            Feature::QnameMinimization => "Not Detected",
            Feature::ExtendedErrors => "Not Available",
            Feature::InfoUrl => "No URL",
        }
    }

    pub fn format(&self, capabilities: &ResolverCapabilities) -> String {
        match self {
            Feature::QnameMinimization => {
                if capabilities.qname_minimization {
                    "Enabled".to_string()
                } else {
                    "Disabled".to_string()
                }
            }
            Feature::ExtendedErrors => capabilities
                .extended_errors
                .as_ref()
                .map(|e| e.description())
                .unwrap_or_else(|| "None".to_string()),
            Feature::InfoUrl => capabilities
                .info_url
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }

    pub fn format_or_sentinel(&self, capabilities: Option<&ResolverCapabilities>) -> String {
        capabilities
            .map(|c| self.format(c))
            .unwrap_or_else(|| self.sentinel().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    pub feature: Feature,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureComparison {
    /// One column per resolver, or per resolver and record type.
    pub columns: Vec<String>,
    pub rows: Vec<FeatureRow>,
}

impl FeatureComparison {
    pub fn from_report(report: &ProbeReport) -> Self {
        let mut columns = Vec::new();
        let mut cells: Vec<Option<&ResolverCapabilities>> = Vec::new();

        for resolver in &report.resolvers {
            for record_type in &report.record_types {
                columns.push(if report.is_multi_type() {
                    format!("{} ({})", resolver.resolver, record_type)
                } else {
                    resolver.resolver.to_string()
                });
                cells.push(resolver.capabilities(*record_type));
            }
        }

        let rows = Feature::ALL
            .iter()
            .map(|feature| FeatureRow {
                feature: *feature,
                values: cells
                    .iter()
                    .map(|cell| feature.format_or_sentinel(*cell))
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn row(&self, feature: Feature) -> Option<&FeatureRow> {
        self.rows.iter().find(|r| r.feature == feature)
    }
}
