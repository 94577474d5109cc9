//! Synthetic record collections.
//!
//! Each listing family declares its records as a list of `(field, FieldGen)`
//! pairs. Collections are generated once, when [`Datasets::generate`] runs,
//! and shared through `Arc` afterwards; nothing regenerates or mutates them.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::DateTime;
use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::lorem::raw::Paragraph;
use fake::faker::name::raw::Name;
use fake::locales::ZH_CN;
use quayside_types::{Page, PageRequest};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::{Map, Value};

use crate::family::ResourceFamily;
use crate::pagination::page_of;

/// Earliest generated timestamp (2020-01-01T00:00:00Z).
const EPOCH_START: i64 = 1_577_836_800;

/// Latest generated timestamp (2026-01-01T00:00:00Z).
const EPOCH_END: i64 = 1_767_225_600;

const EQUIPMENT_NAMES: &[&str] = &["门式起重机", "桥式起重机", "叉车", "集装箱", "吊具"];
const EQUIPMENT_TYPES: &[&str] = &["crane", "forklift", "container", "other"];
const WAREHOUSES: &[&str] = &["1号仓库", "2号仓库", "3号仓库"];
const VESSELS: &[&str] = &["远洋号", "海航号", "顺风号", "乘风号"];

/// How a single field is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldGen {
    /// One value from a fixed enumeration.
    OneOf(&'static [&'static str]),
    /// Integer in an inclusive range.
    IntRange(i64, i64),
    /// `prefix` followed by `digits` random digits, e.g. `EQ004211`.
    Code {
        prefix: &'static str,
        digits: u32,
    },
    /// `pairs` repetitions of an uppercase letter and a digit, e.g. `A1K7`.
    AlnumId { pairs: usize },
    /// A random lowercase word, length in an inclusive range.
    Words { min: usize, max: usize },
    /// Storage slot such as `abc区d号位`.
    Location,
    /// A Chinese personal name.
    ChineseName,
    /// A company name.
    Company,
    /// Free text of `min..=max` sentences.
    Paragraph { min: usize, max: usize },
    /// `YYYY-MM-DD HH:MM:SS`.
    DateTime,
    /// `YYYY-MM-DD`.
    Date,
}

impl FieldGen {
    /// Produce one value.
    pub fn generate(&self, rng: &mut ChaCha8Rng) -> Value {
        match *self {
            FieldGen::OneOf(options) => {
                let idx = rng.random_range(0..options.len());
                Value::from(options[idx])
            }
            FieldGen::IntRange(lo, hi) => Value::from(rng.random_range(lo..=hi)),
            FieldGen::Code { prefix, digits } => {
                let bound = 10u64.pow(digits);
                let n = rng.random_range(0..bound);
                Value::from(format!("{prefix}{n:0width$}", width = digits as usize))
            }
            FieldGen::AlnumId { pairs } => {
                let id: String = (0..pairs)
                    .flat_map(|_| {
                        let letter = char::from(b'A' + rng.random_range(0..26u8));
                        let digit = char::from(b'0' + rng.random_range(0..10u8));
                        [letter, digit]
                    })
                    .collect();
                Value::from(id)
            }
            FieldGen::Words { min, max } => Value::from(letters(rng, min, max)),
            FieldGen::Location => {
                let zone = letters(rng, 2, 4);
                let slot = letters(rng, 1, 2);
                Value::from(format!("{zone}区{slot}号位"))
            }
            FieldGen::ChineseName => {
                let name: String = Name(ZH_CN).fake_with_rng(rng);
                Value::from(name)
            }
            FieldGen::Company => {
                let company: String = CompanyName(ZH_CN).fake_with_rng(rng);
                Value::from(company)
            }
            FieldGen::Paragraph { min, max } => {
                let text: String = Paragraph(ZH_CN, min..max + 1).fake_with_rng(rng);
                Value::from(text)
            }
            FieldGen::DateTime => Value::from(timestamp(rng, "%Y-%m-%d %H:%M:%S")),
            FieldGen::Date => Value::from(timestamp(rng, "%Y-%m-%d")),
        }
    }
}

fn letters(rng: &mut ChaCha8Rng, min: usize, max: usize) -> String {
    let len = rng.random_range(min..=max.max(min));
    (0..len)
        .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
        .collect()
}

fn timestamp(rng: &mut ChaCha8Rng, format: &str) -> String {
    let secs = rng.random_range(EPOCH_START..EPOCH_END);
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_default()
}

/// Shape and size of one family's collection.
#[derive(Debug, Clone, Copy)]
pub struct DatasetSpec {
    pub family: ResourceFamily,
    /// Records actually generated.
    pub count: usize,
    /// Total reported to callers; may exceed `count`.
    pub declared_total: u64,
    pub fields: &'static [(&'static str, FieldGen)],
}

impl DatasetSpec {
    /// Generate `count` records.
    pub fn generate(&self, rng: &mut ChaCha8Rng) -> Vec<Value> {
        (0..self.count)
            .map(|_| {
                let record: Map<String, Value> = self
                    .fields
                    .iter()
                    .map(|(name, field)| (name.to_string(), field.generate(rng)))
                    .collect();
                Value::Object(record)
            })
            .collect()
    }

    /// Spec for a listing family, `None` for families without a dataset.
    pub fn for_family(family: ResourceFamily) -> Option<&'static DatasetSpec> {
        SPECS.iter().find(|s| s.family == family)
    }
}

/// All listing datasets.
pub static SPECS: [DatasetSpec; 7] = [
    DatasetSpec {
        family: ResourceFamily::EquipmentInbound,
        count: 50,
        declared_total: 50,
        fields: &[
            ("id", FieldGen::AlnumId { pairs: 8 }),
            ("equipmentCode", FieldGen::Code { prefix: "EQ", digits: 6 }),
            ("equipmentName", FieldGen::OneOf(EQUIPMENT_NAMES)),
            ("equipmentType", FieldGen::OneOf(EQUIPMENT_TYPES)),
            ("specification", FieldGen::Words { min: 5, max: 10 }),
            ("quantity", FieldGen::IntRange(1, 10)),
            ("supplier", FieldGen::Company),
            ("warehouse", FieldGen::OneOf(WAREHOUSES)),
            ("location", FieldGen::Location),
            ("inboundTime", FieldGen::DateTime),
            ("status", FieldGen::OneOf(&["pending", "completed", "rejected"])),
            ("remark", FieldGen::Paragraph { min: 1, max: 2 }),
        ],
    },
    DatasetSpec {
        family: ResourceFamily::EquipmentInventory,
        count: 40,
        declared_total: 40,
        fields: &[
            ("id", FieldGen::AlnumId { pairs: 8 }),
            ("equipmentCode", FieldGen::Code { prefix: "EQ", digits: 6 }),
            ("equipmentName", FieldGen::OneOf(EQUIPMENT_NAMES)),
            ("equipmentType", FieldGen::OneOf(EQUIPMENT_TYPES)),
            ("totalQuantity", FieldGen::IntRange(10, 100)),
            ("availableQuantity", FieldGen::IntRange(5, 50)),
            ("rentedQuantity", FieldGen::IntRange(0, 30)),
            ("warehouse", FieldGen::OneOf(WAREHOUSES)),
            ("location", FieldGen::Location),
            (
                "status",
                FieldGen::OneOf(&["available", "rented", "maintenance", "damaged"]),
            ),
        ],
    },
    DatasetSpec {
        family: ResourceFamily::EquipmentOutbound,
        count: 45,
        declared_total: 45,
        fields: &[
            ("id", FieldGen::AlnumId { pairs: 8 }),
            ("outboundCode", FieldGen::Code { prefix: "OB", digits: 6 }),
            ("rentalOrder", FieldGen::Code { prefix: "RO", digits: 6 }),
            ("equipmentCode", FieldGen::Code { prefix: "EQ", digits: 6 }),
            ("equipmentName", FieldGen::OneOf(EQUIPMENT_NAMES)),
            ("quantity", FieldGen::IntRange(1, 5)),
            ("outboundTime", FieldGen::DateTime),
            ("operator", FieldGen::ChineseName),
            ("status", FieldGen::OneOf(&["pending", "completed", "cancelled"])),
            ("remark", FieldGen::Paragraph { min: 1, max: 1 }),
        ],
    },
    DatasetSpec {
        family: ResourceFamily::RentalApplication,
        count: 60,
        declared_total: 60,
        fields: &[
            ("id", FieldGen::AlnumId { pairs: 8 }),
            ("applicationCode", FieldGen::Code { prefix: "AP", digits: 6 }),
            ("applicant", FieldGen::ChineseName),
            ("equipmentType", FieldGen::OneOf(EQUIPMENT_TYPES)),
            ("equipmentCode", FieldGen::Code { prefix: "EQ", digits: 6 }),
            ("quantity", FieldGen::IntRange(1, 5)),
            ("startDate", FieldGen::Date),
            ("endDate", FieldGen::Date),
            ("purpose", FieldGen::Paragraph { min: 1, max: 2 }),
            ("applicationTime", FieldGen::DateTime),
            (
                "status",
                FieldGen::OneOf(&["pending", "approved", "rejected", "completed"]),
            ),
            ("remark", FieldGen::Paragraph { min: 1, max: 1 }),
        ],
    },
    DatasetSpec {
        family: ResourceFamily::RentalVoyage,
        count: 35,
        declared_total: 35,
        fields: &[
            ("id", FieldGen::AlnumId { pairs: 8 }),
            ("voyageNumber", FieldGen::Code { prefix: "VY", digits: 6 }),
            ("rentalOrder", FieldGen::Code { prefix: "RO", digits: 6 }),
            ("vesselName", FieldGen::OneOf(VESSELS)),
            ("equipmentList", FieldGen::Words { min: 5, max: 10 }),
            ("usageHours", FieldGen::IntRange(8, 72)),
            ("voyageDate", FieldGen::Date),
            (
                "status",
                FieldGen::OneOf(&["in-progress", "completed", "cancelled"]),
            ),
            ("remark", FieldGen::Paragraph { min: 1, max: 1 }),
        ],
    },
    DatasetSpec {
        family: ResourceFamily::RentalReturn,
        count: 30,
        declared_total: 30,
        fields: &[
            ("id", FieldGen::AlnumId { pairs: 8 }),
            ("returnCode", FieldGen::Code { prefix: "RT", digits: 6 }),
            ("rentalOrder", FieldGen::Code { prefix: "RO", digits: 6 }),
            ("equipmentCode", FieldGen::Code { prefix: "EQ", digits: 6 }),
            ("equipmentName", FieldGen::OneOf(EQUIPMENT_NAMES)),
            ("quantity", FieldGen::IntRange(1, 5)),
            ("returnTime", FieldGen::DateTime),
            (
                "equipmentCondition",
                FieldGen::OneOf(&["good", "normal", "damaged"]),
            ),
            ("damageDescription", FieldGen::Paragraph { min: 1, max: 1 }),
            ("inspectionResult", FieldGen::Paragraph { min: 1, max: 1 }),
            ("inspector", FieldGen::ChineseName),
            (
                "inspectionStatus",
                FieldGen::OneOf(&["pending", "passed", "failed"]),
            ),
            ("remark", FieldGen::Paragraph { min: 1, max: 1 }),
        ],
    },
    DatasetSpec {
        family: ResourceFamily::SettlementFee,
        count: 25,
        declared_total: 25,
        fields: &[
            ("id", FieldGen::AlnumId { pairs: 8 }),
            ("settlementCode", FieldGen::Code { prefix: "ST", digits: 6 }),
            ("rentalOrder", FieldGen::Code { prefix: "RO", digits: 6 }),
            ("applicant", FieldGen::ChineseName),
            ("rentalDays", FieldGen::IntRange(1, 30)),
            ("dailyRate", FieldGen::IntRange(500, 5000)),
            ("equipmentFee", FieldGen::IntRange(1000, 10000)),
            ("usageFee", FieldGen::IntRange(500, 5000)),
            ("damageFee", FieldGen::IntRange(0, 5000)),
            ("discount", FieldGen::IntRange(0, 20)),
            ("totalAmount", FieldGen::IntRange(5000, 50000)),
            (
                "paymentMethod",
                FieldGen::OneOf(&["cash", "transfer", "check", "other"]),
            ),
            ("settlementTime", FieldGen::DateTime),
            ("status", FieldGen::OneOf(&["pending", "paid", "overdue"])),
            ("remark", FieldGen::Paragraph { min: 1, max: 1 }),
        ],
    },
];

/// One generated, immutable collection.
#[derive(Debug, Clone)]
pub struct Dataset {
    spec: &'static DatasetSpec,
    records: Arc<[Value]>,
}

impl Dataset {
    pub fn spec(&self) -> &'static DatasetSpec {
        self.spec
    }

    /// Shared handle to the records. Every call returns the same allocation.
    pub fn records(&self) -> Arc<[Value]> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn declared_total(&self) -> u64 {
        self.spec.declared_total
    }

    /// The requested page with the declared total.
    pub fn page(&self, page: &PageRequest) -> Page<Value> {
        page_of(&self.records[..], page, self.spec.declared_total)
    }
}

/// Every listing family's collection.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    seed: u64,
    collections: BTreeMap<ResourceFamily, Dataset>,
}

impl Datasets {
    /// Generate every collection from `seed`.
    ///
    /// Each family draws from its own RNG stream, so the records of one
    /// family do not depend on which other families exist.
    pub fn generate(seed: u64) -> Self {
        let collections = SPECS
            .iter()
            .map(|spec| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(spec.family as u64));
                let records: Arc<[Value]> = spec.generate(&mut rng).into();
                tracing::debug!(
                    family = %spec.family,
                    count = records.len(),
                    "generated mock dataset"
                );
                (spec.family, Dataset { spec, records })
            })
            .collect();
        Self { seed, collections }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn get(&self, family: ResourceFamily) -> Option<&Dataset> {
        self.collections.get(&family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_match_specs() {
        let datasets = Datasets::generate(1);
        for spec in &SPECS {
            let dataset = datasets.get(spec.family).unwrap();
            assert_eq!(dataset.len(), spec.count, "{}", spec.family);
            assert_eq!(dataset.declared_total(), spec.declared_total);
        }
        assert!(datasets.get(ResourceFamily::Dashboard).is_none());
    }

    #[test]
    fn test_records_have_every_field() {
        let datasets = Datasets::generate(2);
        for spec in &SPECS {
            let dataset = datasets.get(spec.family).unwrap();
            for record in dataset.records().iter() {
                let obj = record.as_object().unwrap();
                assert_eq!(obj.len(), spec.fields.len());
                for (name, _) in spec.fields {
                    assert!(obj.contains_key(*name), "{} missing {}", spec.family, name);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_content() {
        let a = Datasets::generate(42);
        let b = Datasets::generate(42);
        let fam = ResourceFamily::SettlementFee;
        assert_eq!(
            a.get(fam).unwrap().records().as_ref(),
            b.get(fam).unwrap().records().as_ref()
        );
    }

    #[test]
    fn test_records_handle_is_shared() {
        let datasets = Datasets::generate(3);
        let dataset = datasets.get(ResourceFamily::EquipmentInbound).unwrap();
        assert!(Arc::ptr_eq(&dataset.records(), &dataset.records()));
    }

    #[test]
    fn test_field_generators() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..50 {
            let n = FieldGen::IntRange(8, 72).generate(&mut rng).as_i64().unwrap();
            assert!((8..=72).contains(&n));

            let code = FieldGen::Code { prefix: "EQ", digits: 6 }.generate(&mut rng);
            let code = code.as_str().unwrap();
            assert!(code.starts_with("EQ"));
            assert_eq!(code.len(), 8);
            assert!(code[2..].chars().all(|c| c.is_ascii_digit()));

            let id = FieldGen::AlnumId { pairs: 8 }.generate(&mut rng);
            let id = id.as_str().unwrap();
            assert_eq!(id.len(), 16);

            let pick = FieldGen::OneOf(WAREHOUSES).generate(&mut rng);
            assert!(WAREHOUSES.contains(&pick.as_str().unwrap()));

            let date = FieldGen::Date.generate(&mut rng);
            assert_eq!(date.as_str().unwrap().len(), 10);

            let dt = FieldGen::DateTime.generate(&mut rng);
            assert_eq!(dt.as_str().unwrap().len(), 19);
        }
    }
}
