use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt::Formatter;

/// Applies the host's boolean-string convention to the given value.
///
/// The recognized truthy spellings are `"true"`, `"yes"`, `"on"`, `"y"`,
/// `"t"`, and `"1"`, compared case-insensitively after trimming surrounding
/// whitespace. Every other value — including the empty string and words the
/// host does not recognize — is false. There is no error path.
///
/// ## Examples
///
/// ```
/// use ckanext_toolkit::truthy;
///
/// assert!(truthy("true"));
/// assert!(truthy("Yes"));
/// assert!(truthy(" 1 "));
/// assert!(!truthy("false"));
/// assert!(!truthy("maybe"));
/// assert!(!truthy(""));
/// ```
pub fn truthy(value: impl AsRef<str>) -> bool {
    matches!(
        value.as_ref().trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "on" | "y" | "t" | "1"
    )
}

/// The mutable, string-keyed settings map that the hosting framework hands to
/// every extension during startup.
///
/// Keys are dot-namespaced (e.g. `"sentry.dsn"`). Values follow the host's
/// INI-style convention: everything is a string. The map is owned by the
/// host; extensions may read it and overlay values into it in place.
///
/// A [`HostSettings`] can be deserialized from any serde map whose values are
/// scalars; booleans and numbers are coerced to their string form, matching
/// what the host's own configuration loader produces. Sequences and nested
/// maps are rejected.
///
/// ## Examples
///
/// ```
/// use ckanext_toolkit::HostSettings;
///
/// let mut settings = HostSettings::new();
/// settings.set("sentry.log_level", "WARNING");
///
/// assert_eq!(Some("WARNING"), settings.get("sentry.log_level"));
/// assert!(settings.is_blank("sentry.dsn"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostSettings {
    entries: BTreeMap<String, String>,
}

impl HostSettings {
    /// Creates an empty settings map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under the given key, if any.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.entries.get(key.as_ref()).map(String::as_str)
    }

    /// Stores the given value under the given key, overwriting any existing
    /// entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Reports whether the given key is absent or holds a value that is empty
    /// or whitespace-only.
    pub fn is_blank(&self, key: impl AsRef<str>) -> bool {
        match self.get(key) {
            Some(value) => value.trim().is_empty(),
            None => true,
        }
    }

    /// Applies the host's [boolean-string convention](truthy) to the value
    /// stored under the given key. An absent key is false.
    pub fn truthy(&self, key: impl AsRef<str>) -> bool {
        self.get(key).map(truthy).unwrap_or(false)
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl From<BTreeMap<String, String>> for HostSettings {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for HostSettings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

const _: () = {
    impl<'de> Deserialize<'de> for HostSettings {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(HostSettingsVisitor)
        }
    }

    struct HostSettingsVisitor;

    impl<'de> Visitor<'de> for HostSettingsVisitor {
        type Value = HostSettings;

        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            formatter.write_str("a map of host settings with scalar values")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = BTreeMap::new();

            while let Some((key, value)) = map.next_entry::<String, ScalarValue>()? {
                entries.insert(key, value.0);
            }

            Ok(HostSettings { entries })
        }
    }

    /// A setting value in its string form, coerced from any supported scalar.
    struct ScalarValue(String);

    impl<'de> Deserialize<'de> for ScalarValue {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ScalarValueVisitor)
        }
    }

    struct ScalarValueVisitor;

    impl<'de> Visitor<'de> for ScalarValueVisitor {
        type Value = ScalarValue;

        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            formatter.write_str("a scalar setting value (string, boolean, or number)")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(ScalarValue(value.to_owned()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(ScalarValue(value))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(ScalarValue(if value { "true" } else { "false" }.to_owned()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(ScalarValue(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(ScalarValue(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(ScalarValue(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(ScalarValue(String::new()))
        }
    }
};

#[cfg(test)]
mod tests {
    use super::*;
    use assertables::assert_contains;
    use pretty_assertions::assert_eq;

    #[test]
    fn truthy_recognizes_host_spellings() {
        // Given
        let truthy_inputs = ["true", "TRUE", "True", "yes", "Yes", "on", "y", "t", "1", " 1 "];
        let falsy_inputs = ["false", "no", "off", "n", "f", "0", "", " ", "maybe", "2", "enabled"];

        // When / Then
        for input in truthy_inputs {
            assert!(truthy(input), "'{}' is expected to be truthy", input);
        }
        for input in falsy_inputs {
            assert!(!truthy(input), "'{}' is expected to be falsy", input);
        }
    }

    #[test]
    fn set_overwrites_and_get_reads_back() {
        // Given
        let mut settings = HostSettings::new();

        // When
        settings.set("sentry.dsn", "first");
        settings.set("sentry.dsn", "second");

        // Then
        assert_eq!(Some("second"), settings.get("sentry.dsn"));
        assert_eq!(None, settings.get("sentry.log_level"));
        assert_eq!(1, settings.len());
    }

    #[test]
    fn blankness_covers_absent_empty_and_whitespace() {
        // Given
        let mut settings = HostSettings::new();
        settings.set("empty", "");
        settings.set("spaces", "   ");
        settings.set("value", "x");

        // Then
        assert!(settings.is_blank("absent"));
        assert!(settings.is_blank("empty"));
        assert!(settings.is_blank("spaces"));
        assert!(!settings.is_blank("value"));
    }

    #[test]
    fn truthy_lookup_defaults_to_false() {
        // Given
        let mut settings = HostSettings::new();
        settings.set("sentry.configure_logging", "yes");
        settings.set("other.flag", "nope");

        // Then
        assert!(settings.truthy("sentry.configure_logging"));
        assert!(!settings.truthy("other.flag"));
        assert!(!settings.truthy("absent.key"));
    }

    #[test]
    fn iterates_in_key_order() {
        // Given
        let settings =
            HostSettings::from_iter([("b.key", "2"), ("a.key", "1"), ("c.key", "3")]);

        // When
        let keys = settings.iter().map(|(key, _)| key).collect::<Vec<_>>();

        // Then
        assert_eq!(vec!["a.key", "b.key", "c.key"], keys);
        assert_contains!(keys, &"b.key");
    }

    #[test]
    fn from_map_of_strings() {
        // Given
        let input = r#"
sentry.dsn: https://key@sentry.example.org/1
sentry.log_level: WARNING
"#;

        // When
        let settings = serde_yml::from_str::<HostSettings>(input).unwrap();

        // Then
        assert_eq!(
            Some("https://key@sentry.example.org/1"),
            settings.get("sentry.dsn"),
        );
        assert_eq!(Some("WARNING"), settings.get("sentry.log_level"));
    }

    #[test]
    fn from_map_coerces_scalars() {
        // Given
        let input = r#"
sentry.configure_logging: true
retries: 3
ratio: 0.5
note: plain
blank:
"#;

        // When
        let settings = serde_yml::from_str::<HostSettings>(input).unwrap();

        // Then
        assert_eq!(Some("true"), settings.get("sentry.configure_logging"));
        assert_eq!(Some("3"), settings.get("retries"));
        assert_eq!(Some("0.5"), settings.get("ratio"));
        assert_eq!(Some("plain"), settings.get("note"));
        assert_eq!(Some(""), settings.get("blank"));
    }

    #[test]
    fn from_map_rejects_nested_shapes() {
        // Given
        let nested_map = r#"
sentry:
  dsn: value
"#;
        let sequence = r#"
sentry.dsn:
  - one
  - two
"#;

        // Then
        assert!(serde_yml::from_str::<HostSettings>(nested_map).is_err());
        assert!(serde_yml::from_str::<HostSettings>(sequence).is_err());
    }
}
