//! Macros utilitarias para declarar enumeraciones usables como argumentos.
//!
//! Exportadas en la raíz del crate:
//!   use case_core::argument_enum;

/// Declara una enumeración con nombre registrable y su conversión desde/hacia
/// `ArgValue`.
///
/// Forma soportada:
/// - argument_enum! { pub enum Rank as "Rank" { Private => "PRIVATE", Corporal
///   => "CORPORAL" } }
///
/// El orden de declaración define el ordinal de cada miembro.
#[macro_export]
macro_rules! argument_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $label:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name { $($variant),+ }

        impl $crate::model::ArgumentEnum for $name {
            const ENUM_NAME: &'static str = $label;

            fn variants() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn name(&self) -> &'static str {
                match self { $($name::$variant => $text),+ }
            }
        }

        impl $name {
            pub fn ordinal(&self) -> usize {
                <Self as $crate::model::ArgumentEnum>::variants().iter().position(|v| v == self).unwrap_or(0)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::model::ArgumentEnum::name(self))
            }
        }

        impl From<$name> for $crate::model::ArgValue {
            fn from(value: $name) -> Self {
                $crate::model::ArgValue::Enum($crate::model::EnumMember {
                    enum_name: $label.into(),
                    name: $crate::model::ArgumentEnum::name(&value).into(),
                    ordinal: value.ordinal(),
                })
            }
        }

        impl $crate::convert::ArgumentType for $name {
            fn target_type() -> $crate::model::TargetType {
                $crate::model::TargetType::Enum($label.to_string())
            }

            fn from_value(value: &$crate::model::ArgValue) -> Result<Self, String> {
                match value {
                    $crate::model::ArgValue::Enum(m) if &*m.enum_name == $label => {
                        <Self as $crate::model::ArgumentEnum>::from_name(&m.name)
                            .ok_or_else(|| format!("'{}' is not a member of {}", m.name, $label))
                    }
                    other => Err(format!("expected {}, found {}", $label, other.type_label())),
                }
            }
        }
    };
}
