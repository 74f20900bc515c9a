//! Motor de casos de la aplicación: enums, factories, providers y recursos
//! que usan las suites de demostración.
use case_core::source::{FactoryItem, FactoryOutput, FsResourceLoader, ProviderContext, UserError};
use case_core::{ArgValue, Arguments, CaseEngine};
use case_domain::{Book, Gender, Rank, TemporalUnit};
use log::debug;

use crate::config::AppConfig;

/// Fila `(texto de 5 letras, 1 o 2, lista de 2 elementos)`.
fn string_int_and_list(text: &str, number: i32, list: [&str; 2]) -> Vec<ArgValue> {
    vec![ArgValue::from(text), ArgValue::from(number), ArgValue::list(list)]
}

fn string_int_and_list_rows() -> Vec<Vec<ArgValue>> {
    vec![string_int_and_list("apple", 1, ["a", "b"]), string_int_and_list("lemon", 2, ["x", "y"])]
}

pub fn single_param_provider(_context: &ProviderContext) -> Result<Box<dyn Iterator<Item = Arguments>>, UserError> {
    Ok(Box::new(["apple", "banana"].into_iter().map(|s| vec![ArgValue::from(s)])))
}

pub fn multi_params_provider(_context: &ProviderContext) -> Result<Box<dyn Iterator<Item = Arguments>>, UserError> {
    Ok(Box::new(string_int_and_list_rows().into_iter()))
}

/// Construye el motor con todo lo que las suites referencian por nombre.
pub fn demo_engine(config: &AppConfig) -> CaseEngine {
    debug!("resources under {}", config.resources_dir.display());
    CaseEngine::builder().enum_type::<Rank>()
                         .enum_type::<Gender>()
                         .enum_type::<TemporalUnit>()
                         .string_factory(Book::TYPE_NAME, Book::string_factory)
                         .factory("stringProviderStream", || Ok(FactoryOutput::stream(["apple", "banana"])))
                         .factory("stringProviderArray", || Ok(FactoryOutput::array(["apple", "banana"])))
                         .factory("testWithDefaultLocalMethodSource", || Ok(FactoryOutput::stream(["apple", "banana"])))
                         .factory("oddRange", || Ok(FactoryOutput::stream((1..10).filter(|n: &i32| n & 1 == 1))))
                         .factory("stringIntAndListArgumentsStream", || {
                             Ok(FactoryOutput::stream(string_int_and_list_rows().into_iter().map(FactoryItem::Row)))
                         })
                         .factory("stringIntAndListArray", || Ok(FactoryOutput::array(string_int_and_list_rows())))
                         .provider("SingleParamArgumentsProvider", single_param_provider)
                         .provider("MultiParamsArgumentsProvider", multi_params_provider)
                         .resources(FsResourceLoader::new(config.resources_dir.clone()))
                         .build()
}
