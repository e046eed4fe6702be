//! Field descriptors and random test-data generation
//!
//! Every entity field is described by a [`FieldDef`]. The descriptor knows how
//! to produce a random value that is valid for the field type, so fixtures can
//! be populated without hand-writing data for each resource.

use rand::Rng;
use serde_json::{Value, json};

/// String generation flavors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrKind {
    Alpha,
    Alphanumeric,
    Numeric,
    Cjk,
    Latin1,
    Utf8,
}

/// Generation constraints for string fields
#[derive(Clone, Copy, Debug)]
pub struct StrSpec {
    pub kinds: &'static [StrKind],
    pub len_min: usize,
    pub len_max: usize,
    pub choices: &'static [&'static str],
}

impl StrSpec {
    pub const DEFAULT: StrSpec = StrSpec {
        kinds: &[StrKind::Alpha],
        len_min: 4,
        len_max: 30,
        choices: &[],
    };

    pub const fn kinds(mut self, kinds: &'static [StrKind]) -> Self {
        self.kinds = kinds;
        self
    }

    pub const fn len(mut self, min: usize, max: usize) -> Self {
        self.len_min = min;
        self.len_max = max;
        self
    }

    pub const fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self
    }
}

/// The type of a field, including reference fields pointing at other entities
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    Str(StrSpec),
    Integer { min: i64, max: i64 },
    Boolean,
    Email,
    Url,
    Date,
    DateTime,
    IpAddr,
    Netmask,
    MacAddr,
    List,
    Dict,
    /// Reference to a single entity, serialized as `<name>_id`
    OneToOne(&'static str),
    /// Reference to a set of entities, serialized as `<name>_ids`
    OneToMany(&'static str),
}

impl FieldKind {
    /// Generate a random value valid for this field type.
    ///
    /// Reference kinds return `None`; resolving them requires creating the
    /// target entity first, which is the factory's job.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Value> {
        match self {
            FieldKind::Str(spec) => Some(generate_string(spec, rng)),
            FieldKind::Integer { min, max } => Some(json!(rng.random_range(*min..=*max))),
            FieldKind::Boolean => Some(json!(rng.random::<bool>())),
            FieldKind::Email => Some(json!(format!(
                "{}@{}.{}",
                random_chars(rng, StrKind::Alpha, 8).to_lowercase(),
                random_chars(rng, StrKind::Alpha, 8).to_lowercase(),
                pick(rng, &["com", "net", "org", "biz", "info"]),
            ))),
            FieldKind::Url => Some(json!(format!(
                "{}://{}.{}",
                pick(rng, &["http", "https", "ftp"]),
                random_chars(rng, StrKind::Alpha, 10).to_lowercase(),
                pick(rng, &["example.com", "example.org", "test.com"]),
            ))),
            FieldKind::Date => {
                let day = chrono::Utc::now().date_naive()
                    + chrono::Duration::days(rng.random_range(-1825..=1825));
                Some(json!(day.format("%Y-%m-%d").to_string()))
            }
            FieldKind::DateTime => {
                let moment = chrono::Utc::now()
                    + chrono::Duration::seconds(rng.random_range(-157_680_000..=157_680_000));
                Some(json!(moment.format("%Y-%m-%d %H:%M:%S").to_string()))
            }
            FieldKind::IpAddr => Some(json!(format!(
                "{}.{}.{}.{}",
                rng.random_range(1..=223u8),
                rng.random_range(0..=255u8),
                rng.random_range(0..=255u8),
                rng.random_range(1..=254u8),
            ))),
            FieldKind::Netmask => {
                let prefix = rng.random_range(8..=30u32);
                let mask: u32 = u32::MAX << (32 - prefix);
                Some(json!(format!(
                    "{}.{}.{}.{}",
                    (mask >> 24) & 0xff,
                    (mask >> 16) & 0xff,
                    (mask >> 8) & 0xff,
                    mask & 0xff,
                )))
            }
            FieldKind::MacAddr => {
                let octets: Vec<String> = (0..6)
                    .map(|_| format!("{:02x}", rng.random_range(0..=255u8)))
                    .collect();
                Some(json!(octets.join(":")))
            }
            FieldKind::List => Some(json!([])),
            FieldKind::Dict => Some(json!({})),
            FieldKind::OneToOne(_) | FieldKind::OneToMany(_) => None,
        }
    }
}

fn generate_string<R: Rng + ?Sized>(spec: &StrSpec, rng: &mut R) -> Value {
    if !spec.choices.is_empty() {
        return json!(pick(rng, spec.choices));
    }
    let kind = if spec.kinds.is_empty() {
        StrKind::Alpha
    } else {
        spec.kinds[rng.random_range(0..spec.kinds.len())]
    };
    let len = rng.random_range(spec.len_min..=spec.len_max);
    json!(random_chars(rng, kind, len))
}

fn random_chars<R: Rng + ?Sized>(rng: &mut R, kind: StrKind, len: usize) -> String {
    (0..len).map(|_| random_char(rng, kind)).collect()
}

fn random_char<R: Rng + ?Sized>(rng: &mut R, kind: StrKind) -> char {
    const ALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    const ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const DIGITS: &[u8] = b"0123456789";

    match kind {
        StrKind::Alpha => ALPHA[rng.random_range(0..ALPHA.len())] as char,
        StrKind::Alphanumeric => ALNUM[rng.random_range(0..ALNUM.len())] as char,
        StrKind::Numeric => DIGITS[rng.random_range(0..DIGITS.len())] as char,
        StrKind::Cjk => {
            // CJK unified ideographs
            char::from_u32(rng.random_range(0x4e00..=0x9fa5)).unwrap_or('\u{4e00}')
        }
        StrKind::Latin1 => {
            // Latin-1 letters, skipping the multiplication and division signs
            let ranges = [(0xc0u32, 0xd6u32), (0xd8, 0xf6), (0xf8, 0xff)];
            let (lo, hi) = ranges[rng.random_range(0..ranges.len())];
            char::from_u32(rng.random_range(lo..=hi)).unwrap_or('\u{c0}')
        }
        StrKind::Utf8 => {
            let nested = [StrKind::Alpha, StrKind::Cjk, StrKind::Latin1];
            let idx = rng.random_range(0..nested.len());
            random_char(rng, nested[idx])
        }
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

/// One declared field of an entity
#[derive(Clone, Copy, Debug)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Name the server expects on the wire, when it differs from the derived
    /// one (e.g. `filter_type` travels as `type`)
    pub wire_name: Option<&'static str>,
    /// JSON literal used instead of a generated value
    pub default: Option<&'static str>,
}

impl FieldDef {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            wire_name: None,
            default: None,
        }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::Str(StrSpec::DEFAULT))
    }

    pub const fn string_spec(name: &'static str, spec: StrSpec) -> Self {
        Self::new(name, FieldKind::Str(spec))
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer { min: 1, max: 10_000 })
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub const fn email(name: &'static str) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub const fn url(name: &'static str) -> Self {
        Self::new(name, FieldKind::Url)
    }

    pub const fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub const fn datetime(name: &'static str) -> Self {
        Self::new(name, FieldKind::DateTime)
    }

    pub const fn ip(name: &'static str) -> Self {
        Self::new(name, FieldKind::IpAddr)
    }

    pub const fn netmask(name: &'static str) -> Self {
        Self::new(name, FieldKind::Netmask)
    }

    pub const fn mac(name: &'static str) -> Self {
        Self::new(name, FieldKind::MacAddr)
    }

    pub const fn list(name: &'static str) -> Self {
        Self::new(name, FieldKind::List)
    }

    pub const fn dict(name: &'static str) -> Self {
        Self::new(name, FieldKind::Dict)
    }

    pub const fn one_to_one(name: &'static str, target: &'static str) -> Self {
        Self::new(name, FieldKind::OneToOne(target))
    }

    pub const fn one_to_many(name: &'static str, target: &'static str) -> Self {
        Self::new(name, FieldKind::OneToMany(target))
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn renamed(mut self, wire_name: &'static str) -> Self {
        self.wire_name = Some(wire_name);
        self
    }

    pub const fn with_default(mut self, json_literal: &'static str) -> Self {
        self.default = Some(json_literal);
        self
    }

    /// Name under which this field travels in payloads: the declared rename,
    /// or `<name>_id`/`<name>_ids` for references, or the field name itself.
    pub fn wire_name(&self) -> String {
        if let Some(wire) = self.wire_name {
            return wire.to_string();
        }
        match self.kind {
            FieldKind::OneToOne(_) => format!("{}_id", self.name),
            FieldKind::OneToMany(_) => format!("{}_ids", self.name),
            _ => self.name.to_string(),
        }
    }
}
