use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Cargador del texto de un recurso para las fuentes `CsvResource`.
pub trait ResourceLoader: Send + Sync {
    fn load(&self, path: &str) -> io::Result<String>;
}

/// Recursos en disco bajo un directorio raíz. Las rutas absolutas del
/// descriptor (`/data.csv`) se interpretan relativas a la raíz.
#[derive(Debug, Clone)]
pub struct FsResourceLoader {
    root: PathBuf,
}

impl FsResourceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl ResourceLoader for FsResourceLoader {
    fn load(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(path.trim_start_matches('/')))
    }
}

/// Recursos en memoria (tests y suites embebidas).
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceLoader {
    resources: HashMap<String, String>,
}

impl InMemoryResourceLoader {
    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.resources.insert(path.into().trim_start_matches('/').to_string(), content.into());
        self
    }
}

impl ResourceLoader for InMemoryResourceLoader {
    fn load(&self, path: &str) -> io::Result<String> {
        self.resources
            .get(path.trim_start_matches('/'))
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no in-memory resource named '{path}'")))
    }
}
