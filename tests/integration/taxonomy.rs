//! The map-item taxonomy shared by the scenario tests.
//!
//! Three disjoint label families (placement, origin, info type) each get a
//! "has exactly one" helper label and a "has none" helper label. A map item
//! must not be missing both helpers of any family.

use taxon_engine::ContextBuilder;
use taxon_foundation::{
    ConceptContext, ConceptId, Declaration, GroupKind, Matcher, QualificationId,
};

pub struct MapTaxonomy {
    pub ctx: ConceptContext,
    /// Rules that produce helper labels.
    pub label_rules: Vec<QualificationId>,
}

impl MapTaxonomy {
    pub fn id(&self, name: &str) -> ConceptId {
        self.ctx.id_of(name).unwrap()
    }

    /// Every helper concept (leading underscore).
    pub fn helpers(&self) -> Vec<ConceptId> {
        self.ctx
            .concepts()
            .filter(|c| c.name.starts_with('_'))
            .map(|c| c.id)
            .collect()
    }
}

struct Rules {
    builder: ContextBuilder,
}

impl Rules {
    fn ids(&mut self, names: &[&str]) -> Vec<ConceptId> {
        self.builder.concepts(names)
    }

    fn add(&mut self, negated: bool, matcher: Matcher, declared: Vec<Declaration>) -> QualificationId {
        self.builder
            .add_qualification(negated, matcher, declared)
            .unwrap()
            .unwrap()
    }

    /// `one_label` when exactly one member holds, `none_label` when none do.
    fn family(&mut self, one_label: &str, none_label: &str, members: &[&str]) -> [QualificationId; 2] {
        let members = self.ids(members);
        let [one, none] = [one_label, none_label].map(|n| self.builder.concept(n));
        [
            self.add(
                false,
                Matcher::group(GroupKind::OneOf, members.iter().copied()),
                vec![Declaration::is(one)],
            ),
            self.add(
                true,
                Matcher::group(GroupKind::Or, members),
                vec![Declaration::is(none)],
            ),
        ]
    }

    /// Each subject implies every concept in `is`, and denies every concept in `isnt`.
    fn implies(&mut self, subjects: &[&str], is: &[&str], isnt: &[&str]) {
        let mut declared: Vec<Declaration> =
            self.ids(is).into_iter().map(Declaration::is).collect();
        declared.extend(self.ids(isnt).into_iter().map(Declaration::isnt));
        for subject in self.ids(subjects) {
            self.add(false, Matcher::Concept(subject), declared.clone());
        }
    }
}

pub fn map_taxonomy() -> MapTaxonomy {
    let mut rules = Rules {
        builder: ContextBuilder::new(),
    };

    let mut label_rules = Vec::new();
    label_rules.extend(rules.family("_map_label", "_non_map_label", &["site", "path", "area"]));
    label_rules.extend(rules.family("_origin", "_non_origin", &["natural", "artificial"]));
    label_rules.extend(rules.family(
        "_info_type",
        "_non_info_type",
        &["geographic", "structural"],
    ));

    let map_item = rules.builder.concept("map_item");
    for pair in [
        ["_map_label", "_non_map_label"],
        ["_origin", "_non_origin"],
        ["_info_type", "_non_info_type"],
    ] {
        let pair = rules.ids(&pair);
        rules.add(
            true,
            Matcher::group(GroupKind::Or, pair),
            vec![Declaration::isnt(map_item)],
        );
    }

    rules.implies(&["decorative", "functional"], &["artificial"], &[]);
    rules.implies(
        &["settlement", "neighborhood", "village", "town", "city", "country"],
        &["artificial", "area", "building_group"],
        &[],
    );
    rules.implies(&["housing"], &["artificial", "structural", "building"], &[]);
    rules.implies(
        &["machine", "factory", "transportation"],
        &["artificial", "structural", "building", "functional"],
        &[],
    );
    rules.implies(
        &["painting", "statue"],
        &["artificial", "structural", "building", "decorative"],
        &[],
    );
    rules.implies(&["plain"], &["geographic", "biome_related"], &[]);
    rules.implies(&["canyan", "peninsula", "creek", "river"], &["geographic"], &[]);
    rules.implies(&["island", "floating_island", "pond"], &["geographic"], &["path"]);
    rules.implies(&["lake", "sea", "ocean", "continent"], &["geographic", "area"], &[]);

    MapTaxonomy {
        ctx: rules.builder.build().unwrap(),
        label_rules,
    }
}
