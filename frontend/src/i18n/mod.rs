//! Static bilingual copy and the store that selects between the tables.
//!
//! Both tables are values of the same [`Translations`] type, so a key present
//! in one language is present in the other by construction. List lengths are
//! not covered by the type system; the tests below compare the serialized
//! shape of both tables to catch those.

mod en;
mod id;

use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

pub use en::EN;
pub use id::ID;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::En => Language::Id,
            Language::Id => Language::En,
        }
    }

    pub fn table(self) -> &'static Translations {
        match self {
            Language::En => &EN,
            Language::Id => &ID,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Active language plus the table resolved for it.
///
/// The table reference is replaced together with the language in a single
/// write, so a reader holding the store never sees strings from two tables.
#[derive(Clone, Debug, PartialEq)]
pub struct LanguageStore {
    language: Language,
    t: &'static Translations,
}

impl Default for LanguageStore {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl LanguageStore {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            t: language.table(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self) -> &'static Translations {
        self.t
    }

    pub fn set_language(&mut self, language: Language) {
        *self = Self::new(language);
    }

    pub fn toggle(&mut self) {
        self.set_language(self.language.other());
    }
}

pub enum LanguageAction {
    Set(Language),
    Toggle,
}

impl Reducible for LanguageStore {
    type Action = LanguageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LanguageAction::Set(language) => next.set_language(language),
            LanguageAction::Toggle => next.toggle(),
        }
        log::debug!("language {} -> {}", self.language, next.language);
        Rc::new(next)
    }
}

// ---------------------------------------------------------------------------
// Table shape
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Serialize)]
pub struct Translations {
    pub navbar: Navbar,
    pub hero: Hero,
    pub problem: Problem,
    pub features: Features,
    pub security_perimeter: SecurityPerimeter,
    pub discovery_modal: DiscoveryModal,
    pub harmonization_modal: HarmonizationModal,
    pub smart_drafting_modal: SmartDraftingModal,
    pub compliance_modal: ComplianceModal,
    pub risk_modal: RiskModal,
    pub repository_modal: RepositoryModal,
    pub sovereignty: Sovereignty,
    pub footer: Footer,
    pub registration: Registration,
}

/// Title and body pair, the most common card shape on the site.
#[derive(Debug, PartialEq, Serialize)]
pub struct Item {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ModalFooter {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Callout {
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Navbar {
    pub home: &'static str,
    pub manifesto: &'static str,
    pub security: &'static str,
    pub request_protocol: &'static str,
    /// Short label on the desktop toggle, naming the language switched to.
    pub toggle_short: &'static str,
    pub toggle_long: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub title_part1: &'static str,
    pub title_part2: &'static str,
    pub title_part3: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub dashboard: HeroDashboard,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct HeroDashboard {
    pub probabilistic_truth: &'static str,
    pub zero_hallucinations: &'static str,
    pub system_operational: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Problem {
    pub section_title: &'static str,
    pub section_title_highlight: &'static str,
    pub description: &'static str,
    pub error_label: &'static str,
    pub items: &'static [Item],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Features {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub tab_modules: &'static str,
    pub tab_security: &'static str,
    pub cards: FeatureCards,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FeatureCards {
    pub discovery: DiscoveryCard,
    pub harmonization: HarmonizationCard,
    pub drafting: Item,
    pub risk: RiskCard,
    pub compliance: Item,
    pub repository: RepositoryCard,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DiscoveryCard {
    pub title: &'static str,
    pub desc: &'static str,
    pub module: &'static str,
    pub scanning: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct HarmonizationCard {
    pub title: &'static str,
    pub desc: &'static str,
    pub stats: &'static [Stat],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct RiskCard {
    pub title: &'static str,
    pub desc: &'static str,
    pub metric: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct RepositoryCard {
    pub title: &'static str,
    pub desc: &'static str,
    pub encrypted: &'static str,
    pub secure: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SecurityPerimeter {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub pillars: &'static [Pillar],
    pub flow: SecurityFlow,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Pillar {
    pub code: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SecurityFlow {
    pub title: &'static str,
    pub user: &'static str,
    pub steps: &'static [FlowStep],
    pub model: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FlowStep {
    pub label: &'static str,
    pub sublabel: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DiscoveryModal {
    pub badge: &'static str,
    pub headline_start: &'static str,
    pub headline_highlight: &'static str,
    pub subheadline: &'static str,
    pub features_title: &'static str,
    pub library: Item,
    pub vectorization: Item,
    pub bridge: Item,
    pub cta: &'static str,
    pub static_archive: StaticArchive,
    pub footer: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct StaticArchive {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub card1: Item,
    pub card2: Item,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct HarmonizationModal {
    pub badge: &'static str,
    pub headline_start: &'static str,
    pub headline_highlight: &'static str,
    pub subheadline: &'static str,
    pub cta: &'static str,
    pub logic_stack: LogicStack,
    pub comparison: Comparison,
    pub footer: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct LogicStack {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub public_shield: Shield,
    pub corporate_shield: Shield,
    pub protocol_prefix: &'static str,
    pub protocol_highlight: &'static str,
    pub protocol_suffix: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Shield {
    pub title: &'static str,
    pub tag: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub badge: &'static str,
    pub title: &'static str,
    pub scenario: &'static str,
    pub scenario_title: &'static str,
    pub generic: Verdict,
    pub lexia: Verdict,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Verdict {
    pub title: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub result: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SmartDraftingModal {
    pub badge: &'static str,
    pub headline_start: &'static str,
    pub headline_highlight: &'static str,
    pub headline_end: &'static str,
    pub subheadline: &'static str,
    pub cta: &'static str,
    pub risk: Callout,
    pub format: Item,
    pub zombie: Item,
    pub features_title: &'static str,
    pub features_subtitle: &'static str,
    pub inputs: Item,
    pub bilingual: Item,
    pub template: Item,
    pub refinement: Item,
    pub refinement_visual: &'static str,
    pub footer: ModalFooter,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ComplianceModal {
    pub badge: &'static str,
    pub headline_start: &'static str,
    pub headline_highlight: &'static str,
    pub subheadline: &'static str,
    pub cta: &'static str,
    pub blind_spot: Callout,
    pub tiers_title: &'static str,
    pub tiers_subtitle: &'static str,
    pub tier1: Tier,
    pub tier2: Tier,
    pub fixer: Callout,
    pub fixer_match: &'static str,
    pub footer: ModalFooter,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Tier {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct RiskModal {
    pub badge: &'static str,
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta: &'static str,
    pub problem: Callout,
    pub authority_alert: &'static str,
    pub tkdn_alert: &'static str,
    pub features_title: &'static str,
    pub features_subtitle: &'static str,
    pub checks: &'static [Check],
    pub footer: ModalFooter,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Check {
    pub title: &'static str,
    pub desc: &'static str,
    pub check: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct RepositoryModal {
    pub badge: &'static str,
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta: &'static str,
    pub problem: Callout,
    pub features_title: &'static str,
    pub features_subtitle: &'static str,
    pub tagging: Item,
    pub tags: &'static [&'static str],
    pub expiry: Item,
    pub expiry_alert: &'static str,
    pub obligation: Item,
    pub obligation_task: &'static str,
    pub obligation_status: &'static str,
    pub footer: ModalFooter,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Sovereignty {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub saas: Item,
    pub vpc: Item,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Footer {
    pub representation: &'static str,
    pub redefined: &'static str,
    pub legal_intelligence: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
    pub security: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Registration {
    pub badge: &'static str,
    pub headline_start: &'static str,
    pub headline_highlight: &'static str,
    pub subheadline: &'static str,
    pub benefits: &'static [Item],
    pub form: RegistrationForm,
    pub errors: FormErrors,
    pub success: Item,
    pub return_home: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct RegistrationForm {
    pub full_name: &'static str,
    pub work_email: &'static str,
    pub company_name: &'static str,
    pub job_title: &'static str,
    pub phone_number: &'static str,
    pub upload_title: &'static str,
    pub upload_desc: &'static str,
    pub dropzone_text: &'static str,
    pub dropzone_subtext: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub agreement: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FormErrors {
    pub required: &'static str,
    pub invalid_email: &'static str,
    pub unsupported_file: &'static str,
    pub file_too_large: &'static str,
    pub too_many_files: &'static str,
    pub submit_failed: &'static str,
    pub retry: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    /// Replaces every leaf string with an empty one so only keys and list
    /// lengths remain.
    fn shape(value: Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, shape(v))).collect()),
            Value::Array(items) => Value::Array(items.into_iter().map(shape).collect()),
            Value::String(_) => Value::String(String::new()),
            other => other,
        }
    }

    #[test]
    fn tables_have_identical_shape() {
        let en = serde_json::to_value(&EN).expect("serialize en");
        let id = serde_json::to_value(&ID).expect("serialize id");
        assert_eq!(shape(en), shape(id));
    }

    #[test]
    fn no_empty_strings_in_either_table() {
        fn walk(path: &str, value: &Value, lang: Language) {
            match value {
                Value::Object(map) => {
                    for (k, v) in map {
                        walk(&format!("{path}.{k}"), v, lang);
                    }
                }
                Value::Array(items) => {
                    for (i, v) in items.iter().enumerate() {
                        walk(&format!("{path}[{i}]"), v, lang);
                    }
                }
                Value::String(s) => assert!(!s.trim().is_empty(), "{lang}: empty string at {path}"),
                _ => {}
            }
        }
        for lang in [Language::En, Language::Id] {
            let value = serde_json::to_value(lang.table()).expect("serialize");
            walk("t", &value, lang);
        }
    }

    #[test]
    fn defaults_to_english() {
        let store = LanguageStore::default();
        assert_eq!(store.language(), Language::En);
        assert_eq!(store.t().navbar.home, "Home");
    }

    #[test]
    fn set_language_swaps_table_with_language() {
        let mut store = LanguageStore::default();
        store.set_language(Language::Id);
        assert_eq!(store.language(), Language::Id);
        assert!(std::ptr::eq(store.t(), &ID));
        assert_eq!(store.t().navbar.home, "Beranda");
        assert_eq!(store.t().registration.form.submit, "Minta Akses Pilot");
    }

    #[test]
    fn toggle_twice_restores_language() {
        for start in [Language::En, Language::Id] {
            let mut store = LanguageStore::new(start);
            store.toggle();
            assert_eq!(store.language(), start.other());
            store.toggle();
            assert_eq!(store, LanguageStore::new(start));
        }
    }

    #[test]
    fn reducer_leaves_previous_snapshot_untouched() {
        let before = Rc::new(LanguageStore::default());
        let after = before.clone().reduce(LanguageAction::Set(Language::Id));
        assert_eq!(before.t().hero.cta, "Schedule a Protocol");
        assert_eq!(after.t().hero.cta, "Jadwalkan Protokol");

        let back = after.reduce(LanguageAction::Toggle);
        assert_eq!(back.language(), Language::En);
    }

    #[test]
    fn same_language_always_resolves_same_table() {
        assert!(std::ptr::eq(Language::En.table(), Language::En.table()));
        assert!(!std::ptr::eq(Language::En.table(), Language::Id.table()));
    }
}
