use crate::archetype::Archetype;
use crate::error::{BoundaryError, BoundaryErrorExt};
use crate::record::BoundaryCondition;
use fcase_domain::abl::AblConditions;
use fcase_domain::patch::PatchKind;
use fcase_domain::slots::{FieldMask, FieldSlot};
use fcase_fields::FieldSpec;
use fxhash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

const DEFAULT_ARCHETYPE: &str = "custom";

fn default_archetype() -> String {
    DEFAULT_ARCHETYPE.to_owned()
}

/// Declarative description of one patch, as found in a case file.
///
/// ```toml
/// [[patches]]
/// name = "inlet"
/// archetype = "fixed-inlet"
/// refinement_levels = [2, 3]
/// fields = { U = "(5 0 0)" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatchSpec {
    pub name: String,
    /// Kebab-case [`Archetype`] name; `custom` when omitted.
    #[serde(default = "default_archetype")]
    pub archetype: String,
    /// Only honored by the `custom` archetype.
    #[serde(default)]
    pub kind: Option<PatchKind>,
    #[serde(default, alias = "refLevels")]
    pub refinement_levels: Vec<Value>,
    /// Field inputs keyed by OpenFOAM field name.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldSpec>,
}

impl PatchSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        Self {
            name: name.into(),
            archetype: archetype.to_string(),
            kind: None,
            refinement_levels: Vec::new(),
            fields: BTreeMap::new(),
        }
    }

    /// Adds a field input under its OpenFOAM name.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        self.fields.insert(name.into(), spec.into());
        self
    }

    #[must_use]
    pub fn with_refinement_levels(mut self, min: u32, max: u32) -> Self {
        self.refinement_levels = vec![Value::from(min), Value::from(max)];
        self
    }

    /// Builds the record described by this spec.
    ///
    /// # Errors
    /// [`BoundaryError::UnknownArchetype`], [`BoundaryError::UnknownSlot`],
    /// [`BoundaryError::DuplicateSlot`] when two keys name the same slot, or any error of
    /// [`crate::BoundaryConditionBuilder::build`].
    pub fn build(&self, abl: &AblConditions) -> Result<BoundaryCondition, BoundaryError> {
        let archetype: Archetype = self.archetype.trim().parse().map_err(|_| {
            BoundaryError::UnknownArchetype { name: self.archetype.clone(), context: None }
        })?;

        let mut builder = BoundaryCondition::archetype(archetype, abl);
        if let Some(kind) = self.kind {
            builder = builder.kind(kind);
        }
        if !self.refinement_levels.is_empty() {
            builder = builder.refinement_levels(self.refinement_levels.iter().map(level_text));
        }
        let mut seen = FieldMask::empty();
        for (name, spec) in &self.fields {
            let slot = self.slot(name)?;
            if seen.contains(slot.mask()) {
                return Err(BoundaryError::DuplicateSlot { patch: self.name.clone(), slot, context: None });
            }
            seen |= slot.mask();
            builder = builder.field(slot, spec.clone());
        }

        builder.build()
    }

    /// Resolves a field name; falls back to a case-insensitive match since layered
    /// configuration sources may fold key case.
    fn slot(&self, name: &str) -> Result<FieldSlot, BoundaryError> {
        name.parse::<FieldSlot>()
            .ok()
            .or_else(|| FieldSlot::ALL.into_iter().find(|slot| slot.name().eq_ignore_ascii_case(name)))
            .ok_or_else(|| BoundaryError::UnknownSlot {
                patch: self.name.clone(),
                name: name.to_owned(),
                context: None,
            })
    }
}

fn level_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Boundary conditions keyed by patch name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct BoundaryRegistry {
    entries: Vec<(String, BoundaryCondition)>,
    index: FxHashMap<String, usize>,
}

impl BoundaryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every patch of `specs`, stopping at the first error.
    ///
    /// # Errors
    /// [`BoundaryError::DuplicatePatch`] for a repeated name, otherwise the error of
    /// [`PatchSpec::build`] with the patch name as context.
    pub fn from_specs(specs: &[PatchSpec], abl: &AblConditions) -> Result<Self, BoundaryError> {
        let mut registry = Self::new();
        for spec in specs {
            let record = spec.build(abl).context(format!("patch `{}`", spec.name))?;
            registry.insert(spec.name.clone(), record)?;
        }
        info!(patches = registry.len(), "Boundary registry built");
        Ok(registry)
    }

    /// Adds a record under a new name.
    ///
    /// # Errors
    /// [`BoundaryError::DuplicatePatch`] when `name` is already registered.
    pub fn insert(&mut self, name: impl Into<String>, record: BoundaryCondition) -> Result<(), BoundaryError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(BoundaryError::DuplicatePatch { name, context: None });
        }
        debug!(patch = %name, archetype = %record.origin(), "Registered boundary condition");
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, record));
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BoundaryCondition> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundaryCondition)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }
}

impl<'a> IntoIterator for &'a BoundaryRegistry {
    type Item = (&'a str, &'a BoundaryCondition);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for BoundaryRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, record) in self.iter() {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}
