//! Static demo data: city centre, hotspots, briefing insights and the
//! policy cards offered for simulation.

use crate::policy::PolicyType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub lng: f64,
    pub lat: f64,
}

pub const CITY: City = City {
    name: "Sapporo",
    lng: 141.3545,
    lat: 43.0621,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hotspot {
    pub id: &'static str,
    pub name: &'static str,
    pub lng: f64,
    pub lat: f64,
    pub note: &'static str,
}

pub const HOTSPOTS: &[Hotspot] = &[
    Hotspot {
        id: "hs-odori",
        name: "Odori Park Core",
        lng: 141.3542,
        lat: 43.0607,
        note: "High pedestrian density; crosswalk queueing",
    },
    Hotspot {
        id: "hs-susukino",
        name: "Susukino Crossing",
        lng: 141.3539,
        lat: 43.0546,
        note: "Evening nightlife surge; slow circulation",
    },
    Hotspot {
        id: "hs-station",
        name: "Sapporo Station South",
        lng: 141.3509,
        lat: 43.0687,
        note: "Midday arrivals; corridor bottleneck",
    },
    Hotspot {
        id: "hs-tv",
        name: "Sapporo TV Tower",
        lng: 141.3596,
        lat: 43.0615,
        note: "Tour bus clustering; short-stop spikes",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparisons {
    pub yesterday: &'static str,
    pub last_week: &'static str,
    pub last_year: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Insight {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub comparisons: Comparisons,
}

/// The briefing always shows exactly these three digests
pub const BRIEF_INSIGHTS: &[Insight] = &[
    Insight {
        id: "insight-1",
        title: "Congestion concentrated in Odori / Susukino",
        summary: "Pedestrian density peaks between 16:30–20:30 with repeated spillover into adjacent meshes; queue formation visible near arcade entrances.",
        comparisons: Comparisons {
            yesterday: "▲ +9% density in Odori core",
            last_week: "▲ +14% evening footfall",
            last_year: "≈ within seasonal band (+2%)",
        },
    },
    Insight {
        id: "insight-2",
        title: "Sudden spike near Sapporo Station",
        summary: "A short, sharp surge around 12:10–12:45 suggests synchronized arrivals; platform-to-mall corridor becomes the dominant bottleneck.",
        comparisons: Comparisons {
            yesterday: "▲ +18% at midday corridor",
            last_week: "▲ +11% transfer volume",
            last_year: "▲ +7% weekday lunchtime",
        },
    },
    Insight {
        id: "insight-3",
        title: "Unusual dwell time increase after 18:00",
        summary: "Dwell-time distribution shifts right, indicating slower circulation; likely caused by dining peaks and street-level crowding near narrow crossings.",
        comparisons: Comparisons {
            yesterday: "▲ +6 min median dwell",
            last_week: "▲ +9 min median dwell",
            last_year: "≈ stable (+1 min)",
        },
    },
];

/// A selectable policy card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolicyOption {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub policy: PolicyType,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub levers: &'static [&'static str],
    pub tradeoffs: &'static [&'static str],
}

pub const POLICY_OPTIONS: &[PolicyOption] = &[
    PolicyOption {
        id: "p-time",
        policy: PolicyType::TimeDispersion,
        title: "Time dispersion: event schedule shift",
        subtitle: "Stagger arrivals by shifting key activations ±30–60 min",
        levers: &[
            "Partnered venue time slots",
            "Push notifications",
            "Timed ticket nudges",
        ],
        tradeoffs: &["May reduce peak vibe", "Requires partner coordination"],
    },
    PolicyOption {
        id: "p-route",
        policy: PolicyType::RouteDispersion,
        title: "Route dispersion: redirect foot traffic",
        subtitle: "Actively steer pedestrians to parallel corridors",
        levers: &[
            "Dynamic wayfinding",
            "Pop-up attractions",
            "Crosswalk timing tweaks",
        ],
        tradeoffs: &[
            "Risk of displacement complaints",
            "Signage compliance uncertainty",
        ],
    },
    PolicyOption {
        id: "p-transit",
        policy: PolicyType::TransitNudges,
        title: "Transit nudges: promote subway transfers",
        subtitle: "Reduce surface congestion by shifting short hops to transit",
        levers: &[
            "Fare incentives",
            "Station guidance staff",
            "Real-time crowd UI",
        ],
        tradeoffs: &["Subway platform crowding", "Budget impact"],
    },
    PolicyOption {
        id: "p-soft",
        policy: PolicyType::SoftRestriction,
        title: "Area soft restriction: signage + staff",
        subtitle: "Slow entry and manage queues at pinch points",
        levers: &[
            "Queue lanes",
            "Staffed crossings",
            "On-site advisory signage",
        ],
        tradeoffs: &["Perceived friction", "Operational staffing load"],
    },
];

pub fn find_policy_option(id: &str) -> Option<&'static PolicyOption> {
    POLICY_OPTIONS.iter().find(|p| p.id == id)
}
