//! The stage registry: one configuration record per processing stage.
//!
//! Every behavioral difference between the nine stages lives here as data.
//! The panel component, the validation rules, and the API wrappers are all
//! generic over a [`StageConfig`]; nothing stage-specific is coded anywhere
//! else.

/// Order matches the physical pipeline; the discriminant indexes [`STAGES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageId {
    NungSeparation,
    GalaxyScanning,
    Planning,
    Shine,
    LsSawing,
    ActiPart,
    FourP,
    Hpht,
    Polishing,
}

impl StageId {
    pub fn config(self) -> &'static StageConfig {
        &STAGES[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Carat,
    Gram,
}

impl WeightUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            WeightUnit::Carat => "ct",
            WeightUnit::Gram => "g",
        }
    }
}

/// Which counterparty fields a stage's assign form shows and requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterpartyRule {
    /// A single party field, required.
    Party,
    /// A planner field, required; the planner is chosen at assign time and
    /// is never auto-filled from the eligible row.
    Planner,
    /// Kapan number and party name, both required.
    KapanAndParty,
    /// Kapan number required plus at least one of party or karigar.
    KapanAndPartyOrKarigar,
}

impl CounterpartyRule {
    pub fn has_kapan(&self) -> bool {
        !matches!(self, CounterpartyRule::Party | CounterpartyRule::Planner)
    }

    pub fn has_karigar(&self) -> bool {
        matches!(self, CounterpartyRule::KapanAndPartyOrKarigar)
    }

    /// Label of the party/planner input.
    pub fn party_label(&self) -> &'static str {
        match self {
            CounterpartyRule::Planner => "Planner Name",
            _ => "Party Name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageConfig {
    pub id: StageId,
    pub title: &'static str,
    pub assign_path: &'static str,
    pub submit_path: &'static str,
    pub entries_path: &'static str,
    pub eligible_path: &'static str,
    pub weight_unit: WeightUnit,
    pub counterparty: CounterpartyRule,
    /// The submit form uploads a CSV report (planning only).
    pub csv_upload: bool,
}

pub const STAGES: [StageConfig; 9] = [
    StageConfig {
        id: StageId::NungSeparation,
        title: "Nung Separation",
        assign_path: "/api/nung-separation/assign",
        submit_path: "/api/nung-separation/submit",
        entries_path: "/api/nung-separation/entries",
        eligible_path: "/api/nung-separation/eligible_rough_packets",
        weight_unit: WeightUnit::Carat,
        counterparty: CounterpartyRule::Party,
        csv_upload: false,
    },
    StageConfig {
        id: StageId::GalaxyScanning,
        title: "Galaxy Scanning",
        assign_path: "/api/galaxy-scanning/assign",
        submit_path: "/api/galaxy-scanning/submit",
        entries_path: "/api/galaxy-scanning/entries",
        eligible_path: "/api/galaxy-scanning/eligible_nung_packets",
        weight_unit: WeightUnit::Carat,
        counterparty: CounterpartyRule::Party,
        csv_upload: false,
    },
    StageConfig {
        id: StageId::Planning,
        title: "Planning",
        assign_path: "/planning/assign",
        submit_path: "/planning/submit",
        entries_path: "/api/planning/entries",
        eligible_path: "/api/planning/eligible_galaxy_packets",
        weight_unit: WeightUnit::Carat,
        counterparty: CounterpartyRule::Planner,
        csv_upload: true,
    },
    StageConfig {
        id: StageId::Shine,
        title: "Shine",
        assign_path: "/api/shine/assign",
        submit_path: "/api/shine/submit",
        entries_path: "/api/shine/entries",
        eligible_path: "/api/shine/eligible_planning_packets",
        weight_unit: WeightUnit::Gram,
        counterparty: CounterpartyRule::KapanAndParty,
        csv_upload: false,
    },
    StageConfig {
        id: StageId::LsSawing,
        title: "LS Sawing",
        assign_path: "/api/lssoing/assign",
        submit_path: "/api/lssoing/submit",
        entries_path: "/api/lssoing/entries",
        eligible_path: "/api/lssoing/eligible_shine_packets",
        weight_unit: WeightUnit::Gram,
        counterparty: CounterpartyRule::KapanAndParty,
        csv_upload: false,
    },
    StageConfig {
        id: StageId::ActiPart,
        title: "Acti Part",
        assign_path: "/api/actipart/assign",
        submit_path: "/api/actipart/submit",
        entries_path: "/api/actipart/entries",
        eligible_path: "/api/actipart/eligible_lssoing_packets",
        weight_unit: WeightUnit::Gram,
        counterparty: CounterpartyRule::KapanAndPartyOrKarigar,
        csv_upload: false,
    },
    StageConfig {
        id: StageId::FourP,
        title: "4P",
        assign_path: "/api/four-p/assign",
        submit_path: "/api/four-p/submit",
        entries_path: "/api/four-p/entries",
        eligible_path: "/api/four-p/eligible_actipart_packets",
        weight_unit: WeightUnit::Carat,
        counterparty: CounterpartyRule::KapanAndPartyOrKarigar,
        csv_upload: false,
    },
    StageConfig {
        id: StageId::Hpht,
        title: "HPHT",
        assign_path: "/api/hpht/assign",
        submit_path: "/api/hpht/submit",
        entries_path: "/api/hpht/entries",
        eligible_path: "/api/hpht/eligible_four_p_packets",
        weight_unit: WeightUnit::Carat,
        counterparty: CounterpartyRule::KapanAndPartyOrKarigar,
        csv_upload: false,
    },
    StageConfig {
        id: StageId::Polishing,
        title: "Polishing",
        assign_path: "/api/polishing/assign",
        submit_path: "/api/polishing/submit",
        entries_path: "/api/polishing/entries",
        eligible_path: "/api/polishing/eligible_hpht_packets",
        weight_unit: WeightUnit::Carat,
        counterparty: CounterpartyRule::KapanAndPartyOrKarigar,
        csv_upload: false,
    },
];
