// Space weather event catalog
use crate::domain::error::DashboardError;
use crate::domain::series::ChartKind;
use serde::Serialize;

/// The nine event kinds DONKI exposes. The selection set is closed: anything
/// else fails at parse time rather than defaulting silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Cme,
    Gst,
    Flr,
    Sep,
    Ips,
    Rbe,
    Mpc,
    Hss,
    Notifications,
}

/// How tidy rows for an event collapse into one value per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Number of rows per date (most event kinds)
    Count,
    /// Arithmetic mean of row values per date (GST Kp index)
    Mean,
}

/// Static per-event metadata: labels, glossary text, where the timestamp
/// lives in the upstream record, and how to chart the result.
#[derive(Debug, Clone, Copy)]
pub struct EventDescriptor {
    pub kind: EventKind,
    pub display_name: &'static str,
    pub description: &'static str,
    pub date_field: &'static str,
    pub y_label: &'static str,
    pub chart_kind: ChartKind,
    pub reduction: Reduction,
}

pub const CATALOG: [EventDescriptor; 9] = [
    EventDescriptor {
        kind: EventKind::Cme,
        display_name: "CME (Coronal Mass Ejection)",
        description: "Coronal Mass Ejection (CME): A massive burst of solar wind and magnetic fields rising above the solar corona.",
        date_field: "startTime",
        y_label: "Number of CMEs",
        chart_kind: ChartKind::Line,
        reduction: Reduction::Count,
    },
    EventDescriptor {
        kind: EventKind::Gst,
        display_name: "GST (Geomagnetic Storm)",
        description: "Geomagnetic Storm (GST): Disturbances in Earth's magnetosphere caused by solar wind shocks.",
        date_field: "startTime",
        y_label: "Average Kp Index",
        chart_kind: ChartKind::Line,
        reduction: Reduction::Mean,
    },
    EventDescriptor {
        kind: EventKind::Flr,
        display_name: "FLR (Solar Flare)",
        description: "Solar Flare (FLR): A sudden flash of increased brightness on the Sun, usually observed near its surface.",
        date_field: "beginTime",
        y_label: "Number of Solar Flares",
        chart_kind: ChartKind::Bar,
        reduction: Reduction::Count,
    },
    EventDescriptor {
        kind: EventKind::Sep,
        display_name: "SEP (Solar Energetic Particle)",
        description: "Solar Energetic Particle (SEP): High-energy particles emitted by the Sun, often associated with solar flares and CMEs.",
        date_field: "eventTime",
        y_label: "Number of Solar Energetic Particles",
        chart_kind: ChartKind::Bar,
        reduction: Reduction::Count,
    },
    EventDescriptor {
        kind: EventKind::Ips,
        display_name: "IPS (Interplanetary Shock)",
        description: "Interplanetary Shock (IPS): Shock waves traveling through space, often caused by CMEs or solar wind variations.",
        date_field: "eventTime",
        y_label: "Number of Interplanetary Shocks",
        chart_kind: ChartKind::Bar,
        reduction: Reduction::Count,
    },
    EventDescriptor {
        kind: EventKind::Rbe,
        display_name: "RBE (Radiation Belt Enhancement)",
        description: "Radiation Belt Enhancement (RBE): An increase in the density of charged particles in Earth's radiation belts.",
        date_field: "eventTime",
        y_label: "Number of Radiation Belt Enhancements",
        chart_kind: ChartKind::Bar,
        reduction: Reduction::Count,
    },
    EventDescriptor {
        kind: EventKind::Mpc,
        display_name: "MPC (Magnetopause Crossing)",
        description: "Magnetopause Crossing (MPC): When solar wind plasma crosses Earth's magnetopause, the boundary of the magnetosphere.",
        date_field: "eventTime",
        y_label: "Number of Magnetopause Crossings",
        chart_kind: ChartKind::Bar,
        reduction: Reduction::Count,
    },
    EventDescriptor {
        kind: EventKind::Hss,
        display_name: "HSS (High Speed Stream)",
        description: "High Speed Stream (HSS): Streams of fast-moving solar wind emanating from coronal holes on the Sun.",
        date_field: "eventTime",
        y_label: "Number of High Speed Streams",
        chart_kind: ChartKind::Bar,
        reduction: Reduction::Count,
    },
    EventDescriptor {
        kind: EventKind::Notifications,
        display_name: "Notifications",
        description: "Notifications: General alerts and updates related to various space weather events.",
        date_field: "messageIssueTime",
        y_label: "Number of Notifications",
        chart_kind: ChartKind::Bar,
        reduction: Reduction::Count,
    },
];

impl EventKind {
    /// Upstream endpoint path segment and canonical code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            EventKind::Cme => "CME",
            EventKind::Gst => "GST",
            EventKind::Flr => "FLR",
            EventKind::Sep => "SEP",
            EventKind::Ips => "IPS",
            EventKind::Rbe => "RBE",
            EventKind::Mpc => "MPC",
            EventKind::Hss => "HSS",
            EventKind::Notifications => "notifications",
        }
    }

    pub fn parse(code: &str) -> Result<Self, DashboardError> {
        CATALOG
            .iter()
            .map(|d| d.kind)
            .find(|kind| kind.code() == code)
            .ok_or_else(|| DashboardError::UnknownEventKind(code.to_string()))
    }

    pub fn descriptor(&self) -> &'static EventDescriptor {
        // CATALOG is in declaration order
        let index = match self {
            EventKind::Cme => 0,
            EventKind::Gst => 1,
            EventKind::Flr => 2,
            EventKind::Sep => 3,
            EventKind::Ips => 4,
            EventKind::Rbe => 5,
            EventKind::Mpc => 6,
            EventKind::Hss => 7,
            EventKind::Notifications => 8,
        };
        &CATALOG[index]
    }
}

/// Catalog entry as served by the glossary endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub code: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub y_label: &'static str,
    pub chart_kind: ChartKind,
}

impl From<&EventDescriptor> for EventSummary {
    fn from(descriptor: &EventDescriptor) -> Self {
        Self {
            code: descriptor.kind.code(),
            display_name: descriptor.display_name,
            description: descriptor.description,
            y_label: descriptor.y_label,
            chart_kind: descriptor.chart_kind,
        }
    }
}
