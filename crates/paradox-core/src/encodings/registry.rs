use std::collections::BTreeMap;
use std::sync::OnceLock;

use log::debug;

use super::error::CodecError;
use super::{Codec, EN, RU};

/// Named lookup of panel codecs.
///
/// # Examples
/// ```
/// use paradox_core::encodings::{CodecRegistry, EN};
///
/// let mut registry = CodecRegistry::new();
/// registry.register(EN.name(), &EN).unwrap();
/// registry.register(EN.name(), &EN).unwrap();
/// assert_eq!(registry.names().count(), 1);
/// assert_eq!(registry.decode(b"B", "paradox-en").unwrap(), "B");
/// ```
#[derive(Debug, Default)]
pub struct CodecRegistry {
    codecs: BTreeMap<String, &'static Codec>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding both panel codecs.
    pub fn with_panel_codecs() -> Self {
        let mut registry = Self::new();
        registry.codecs.insert(EN.name().to_string(), &EN);
        registry.codecs.insert(RU.name().to_string(), &RU);
        registry
    }

    /// Install `codec` under `name`. Re-registering the same table is a no-op.
    pub fn register(&mut self, name: &str, codec: &'static Codec) -> Result<(), CodecError> {
        match self.codecs.get(name) {
            Some(existing) if existing.same_table(codec) => Ok(()),
            Some(_) => Err(CodecError::Conflict {
                name: name.to_string(),
            }),
            None => {
                debug!("registering codec {name} ({} entries)", codec.table().len());
                self.codecs.insert(name.to_string(), codec);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<&'static Codec, CodecError> {
        self.codecs
            .get(name)
            .copied()
            .ok_or_else(|| CodecError::UnknownCodec {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.codecs.keys().map(String::as_str)
    }

    pub fn decode(&self, bytes: &[u8], name: &str) -> Result<String, CodecError> {
        self.get(name)?.decode(bytes)
    }

    pub fn encode(&self, text: &str, name: &str) -> Result<Vec<u8>, CodecError> {
        self.get(name)?.encode(text)
    }
}

static GLOBAL: OnceLock<CodecRegistry> = OnceLock::new();

/// Process-wide registry with `paradox-en` and `paradox-ru` installed.
///
/// Safe to call any number of times, from any thread; the registry is built
/// on the first call only.
pub fn register_encodings() -> &'static CodecRegistry {
    GLOBAL.get_or_init(CodecRegistry::with_panel_codecs)
}

/// Decode `bytes` with the named codec from the process-wide registry.
pub fn decode(bytes: &[u8], name: &str) -> Result<String, CodecError> {
    register_encodings().decode(bytes, name)
}

/// Encode `text` with the named codec from the process-wide registry.
pub fn encode(text: &str, name: &str) -> Result<Vec<u8>, CodecError> {
    register_encodings().encode(text, name)
}

#[cfg(test)]
mod tests {
    use super::{CodecRegistry, decode, register_encodings};
    use crate::encodings::{Codec, CodecError, EN, RU};

    static FAKE_EN: Codec = Codec::new("paradox-en", &['x'; 4]);

    #[test]
    fn register_is_idempotent() {
        let mut registry = CodecRegistry::new();
        registry.register("paradox-en", &EN).unwrap();
        registry.register("paradox-en", &EN).unwrap();
        registry.register("paradox-ru", &RU).unwrap();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["paradox-en", "paradox-ru"]
        );
    }

    #[test]
    fn register_rejects_different_table_under_same_name() {
        let mut registry = CodecRegistry::with_panel_codecs();
        let err = registry.register("paradox-en", &FAKE_EN).unwrap_err();
        assert!(matches!(err, CodecError::Conflict { .. }));
        assert_eq!(registry.decode(b"B", "paradox-en").unwrap(), "B");
    }

    #[test]
    fn unknown_codec_is_reported() {
        let err = decode(b"B", "paradox-de").unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownCodec {
                name: "paradox-de".to_string()
            }
        );
    }

    #[test]
    fn global_registry_is_shared() {
        let first = register_encodings() as *const CodecRegistry;
        let second = register_encodings() as *const CodecRegistry;
        assert_eq!(first, second);
        assert_eq!(register_encodings().names().count(), 2);
    }

    #[test]
    fn concurrent_initialisation_yields_one_registry() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| register_encodings() as *const CodecRegistry as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
