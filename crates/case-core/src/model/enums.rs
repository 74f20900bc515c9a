//! Enumeraciones conocidas por el core.
//!
//! En lugar de reflexión, cada enumeración se registra explícitamente (por lo
//! general con `argument_enum!`) y queda disponible por nombre para las
//! fuentes `EnumValues` y la conversión implícita `String -> Enum`.
use std::sync::Arc;

use indexmap::IndexMap;

use super::EnumMember;

/// Enumeración utilizable como argumento. Los miembros se listan en orden de
/// ordinal.
pub trait ArgumentEnum: Sized + Copy + 'static {
    const ENUM_NAME: &'static str;

    fn variants() -> &'static [Self];

    fn name(&self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|v| v.name() == name)
    }

    fn definition() -> EnumDefinition {
        EnumDefinition::new(Self::ENUM_NAME, Self::variants().iter().map(|v| v.name()))
    }
}

/// Definición de una enumeración: nombre y miembros ordenados por ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    name: Arc<str>,
    members: Vec<Arc<str>>,
}

impl EnumDefinition {
    pub fn new<I, S>(name: &str, members: I) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        Self { name: name.into(),
               members: members.into_iter().map(|m| Arc::from(m.as_ref())).collect() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members.iter().any(|m| &**m == member)
    }

    pub fn member(&self, member: &str) -> Option<EnumMember> {
        self.members
            .iter()
            .position(|m| &**m == member)
            .map(|ordinal| self.member_at(ordinal))
    }

    /// Miembros en orden de ordinal.
    pub fn members(&self) -> impl Iterator<Item = EnumMember> + '_ {
        (0..self.members.len()).map(move |ordinal| self.member_at(ordinal))
    }

    fn member_at(&self, ordinal: usize) -> EnumMember {
        EnumMember { enum_name: self.name.clone(),
                     name: self.members[ordinal].clone(),
                     ordinal }
    }
}

/// Registro de enumeraciones por nombre (orden de registro preservado).
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    enums: IndexMap<String, EnumDefinition>,
}

impl EnumRegistry {
    pub fn register<E: ArgumentEnum>(&mut self) -> &mut Self {
        self.register_definition(E::definition())
    }

    pub fn register_definition(&mut self, definition: EnumDefinition) -> &mut Self {
        self.enums.insert(definition.name().to_string(), definition);
        self
    }

    pub fn get(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums.get(name)
    }

    pub fn member(&self, enum_name: &str, member: &str) -> Option<EnumMember> {
        self.get(enum_name).and_then(|d| d.member(member))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.enums.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_keep_ordinal_order() {
        let def = EnumDefinition::new("Rank", ["PRIVATE", "CORPORAL", "SERGEANT"]);
        let names: Vec<String> = def.members().map(|m| m.name.to_string()).collect();
        assert_eq!(names, vec!["PRIVATE", "CORPORAL", "SERGEANT"]);
        assert_eq!(def.member("SERGEANT").map(|m| m.ordinal), Some(2));
        assert!(def.member("GENERAL").is_none());
    }

    #[test]
    fn registry_looks_up_by_name() {
        let mut registry = EnumRegistry::default();
        registry.register_definition(EnumDefinition::new("Gender", ["F", "M"]));
        assert_eq!(registry.member("Gender", "M").map(|m| m.ordinal), Some(1));
        assert!(registry.member("Rank", "M").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Gender"]);
    }
}
