//! Nombres estructurales de clases y métodos.
use crate::model::TargetType;

/// Separa en cada mayúscula (salvo la inicial), pasa cada palabra a
/// minúsculas, une con espacios y capitaliza solo el primer carácter.
///
/// `"camelCaseName"` => `"Camel case name"`.
pub fn camel_case_to_sentence(identifier: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for c in identifier.chars() {
        match words.last_mut() {
            Some(word) if !c.is_uppercase() => word.push(c),
            _ => words.push(c.to_string()),
        }
    }
    let sentence = words.iter().map(|w| w.to_lowercase()).collect::<Vec<_>>().join(" ");
    capitalize(&sentence)
}

/// Separa en cada guion bajo y une las palabras con un espacio.
///
/// `"test_spaces_ok"` => `"test spaces ok"`.
pub fn underscores_to_sentence(identifier: &str) -> String {
    identifier.split('_').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" ")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Último segmento de una ruta `a::b::Tipo`.
fn simple_name(class: &str) -> &str {
    class.rsplit("::").next().unwrap_or(class)
}

fn parameter_list(params: &[TargetType]) -> String {
    params.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Estrategia de nombres para clases, clases anidadas y métodos de prueba.
pub trait DisplayNameGenerator: Send + Sync {
    fn class_name(&self, class: &str) -> String;

    fn nested_class_name(&self, class: &str) -> String;

    fn method_name(&self, class: &str, method: &str, params: &[TargetType]) -> String;
}

/// Identificadores tal cual; métodos como `nombre(Tipos)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standard;

impl DisplayNameGenerator for Standard {
    fn class_name(&self, class: &str) -> String {
        simple_name(class).to_string()
    }

    fn nested_class_name(&self, class: &str) -> String {
        simple_name(class).to_string()
    }

    fn method_name(&self, _class: &str, method: &str, params: &[TargetType]) -> String {
        format!("{method}({})", parameter_list(params))
    }
}

/// Guiones bajos reemplazados por espacios; la lista de parámetros solo se
/// añade si hay parámetros.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceUnderscores;

impl DisplayNameGenerator for ReplaceUnderscores {
    fn class_name(&self, class: &str) -> String {
        underscores_to_sentence(simple_name(class))
    }

    fn nested_class_name(&self, class: &str) -> String {
        underscores_to_sentence(simple_name(class))
    }

    fn method_name(&self, _class: &str, method: &str, params: &[TargetType]) -> String {
        let name = underscores_to_sentence(method);
        if params.is_empty() {
            name
        } else {
            format!("{name} ({})", parameter_list(params))
        }
    }
}

/// camelCase convertido en frase para clases, anidadas y métodos.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicativeSentences;

impl DisplayNameGenerator for IndicativeSentences {
    fn class_name(&self, class: &str) -> String {
        camel_case_to_sentence(simple_name(class))
    }

    fn nested_class_name(&self, class: &str) -> String {
        camel_case_to_sentence(simple_name(class))
    }

    fn method_name(&self, _class: &str, method: &str, _params: &[TargetType]) -> String {
        camel_case_to_sentence(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_becomes_a_sentence() {
        assert_eq!(camel_case_to_sentence("camelCaseName"), "Camel case name");
        assert_eq!(camel_case_to_sentence("CustomDisplayNameGenerator"), "Custom display name generator");
        assert_eq!(camel_case_to_sentence("x"), "X");
        assert_eq!(camel_case_to_sentence(""), "");
    }

    #[test]
    fn underscores_become_spaces() {
        assert_eq!(underscores_to_sentence("test_spaces_ok"), "test spaces ok");
        assert_eq!(underscores_to_sentence("__a__b_"), "a b");
    }

    #[test]
    fn generators_shape_method_names() {
        let params = [TargetType::Int, TargetType::Str];
        assert_eq!(Standard.method_name("Demo", "camelCaseName", &[]), "camelCaseName()");
        assert_eq!(Standard.method_name("Demo", "ranked", &params), "ranked(i32, String)");
        assert_eq!(Standard.class_name("suites::display::Demo"), "Demo");
        assert_eq!(ReplaceUnderscores.method_name("Demo", "test_spaces_ok", &[]), "test spaces ok");
        assert_eq!(ReplaceUnderscores.method_name("Demo", "with_args", &params), "with args (i32, String)");
        assert_eq!(IndicativeSentences.method_name("Demo", "camelCaseName", &[]), "Camel case name");
        assert_eq!(IndicativeSentences.class_name("CustomDisplayNameGenerator"), "Custom display name generator");
    }
}
