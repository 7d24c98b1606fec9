//! Claim records shared by the unit tests, shaped like Wikidata entity JSON.

use serde_json::{json, Value};

use crate::model::{Claim, ClaimsTable, Snak};

const GREGORIAN: &str = "http://www.wikidata.org/entity/Q1985727";
const JULIAN: &str = "http://www.wikidata.org/entity/Q1985786";

pub(crate) const P214_ID: &str = "Q2112$ECB9E5BB-B2E1-4E77-8CEE-4E9F4938EB86";
pub(crate) const P214_REFERENCE_HASH: &str = "d6b4bc80e47def2fab91836d81e1db62c640279c";
pub(crate) const P580_QUALIFIER_HASH: &str = "3d22f4dffba1ac6f66f521ea6bea924e46df4129";
pub(crate) const EMPTY_VALUE_IDS: [&str; 3] = [
    "Q4115189$c973aadc-48d3-5ac2-45fc-9f34a51ebdf6",
    "Q4115189$db1940f1-41bd-ad24-8fbc-20bc6465a35f",
    "Q4115189$5c85ec5e-48f5-716d-8944-c4364693e406",
];

fn parse<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).unwrap()
}

fn item_value(id: &str) -> Value {
    let numeric: u64 = id[1..].parse().unwrap();
    json!({
        "value": { "entity-type": "item", "numeric-id": numeric, "id": id },
        "type": "wikibase-entityid"
    })
}

fn time_value(time: &str, precision: u8) -> Value {
    calendar_time_value(time, precision, GREGORIAN)
}

fn calendar_time_value(time: &str, precision: u8, calendarmodel: &str) -> Value {
    json!({
        "value": {
            "time": time,
            "timezone": 0,
            "before": 0,
            "after": 0,
            "precision": precision,
            "calendarmodel": calendarmodel
        },
        "type": "time"
    })
}

fn value_snak(property: &str, datatype: &str, datavalue: Value) -> Value {
    json!({
        "snaktype": "value",
        "property": property,
        "datatype": datatype,
        "datavalue": datavalue
    })
}

fn statement(id: &str, mainsnak: Value, rank: &str) -> Value {
    json!({ "mainsnak": mainsnak, "type": "statement", "id": id, "rank": rank })
}

// =====================
// Q2112 (Bielefeld)
// =====================

/// VIAF id with one sourced reference.
pub(crate) fn q2112_p214() -> Claim {
    let mut claim = statement(
        P214_ID,
        value_snak(
            "P214",
            "external-id",
            json!({ "value": "148457154", "type": "string" }),
        ),
        "normal",
    );
    claim["references"] = json!([{
        "hash": P214_REFERENCE_HASH,
        "snaks": {
            "P248": [value_snak("P248", "wikibase-item", item_value("Q54919"))],
            "P813": [value_snak("P813", "time", time_value("+2015-08-02T00:00:00Z", 11))]
        },
        "snaks-order": ["P248", "P813"]
    }]);
    parse(claim)
}

/// Twin towns; the second one carries a dated qualifier.
pub(crate) fn q2112_p190() -> Vec<Claim> {
    let first = statement(
        "Q2112$8CF8A6BD-36E2-4E1B-8CA4-A5E8D9C7D65A",
        value_snak("P190", "wikibase-item", item_value("Q207614")),
        "normal",
    );
    let mut second = statement(
        "Q2112$5E0B6A2C-0BD0-4E71-9A43-1B85CC6C4D1E",
        value_snak("P190", "wikibase-item", item_value("Q171265")),
        "normal",
    );
    let mut qualifier = value_snak("P580", "time", time_value("+1953-00-00T00:00:00Z", 9));
    qualifier["hash"] = json!(P580_QUALIFIER_HASH);
    second["qualifiers"] = json!({ "P580": [qualifier] });
    second["qualifiers-order"] = json!(["P580"]);
    parse(json!([first, second]))
}

pub(crate) fn q2112_p625() -> Claim {
    parse(statement(
        "q2112$E4F3DBA5-8F73-4D6B-B5C5-E3D9E1C3D5A2",
        value_snak(
            "P625",
            "globe-coordinate",
            json!({
                "value": {
                    "latitude": 52.016666666667,
                    "longitude": 8.5166666666667,
                    "altitude": null,
                    "precision": 0.016666666666667,
                    "globe": "http://www.wikidata.org/entity/Q2"
                },
                "type": "globecoordinate"
            }),
        ),
        "normal",
    ))
}

/// Elevation above sea level, in metres.
pub(crate) fn q2112_p2044() -> Claim {
    parse(statement(
        "Q2112$0B3C42E6-6A6E-4E0E-9B6B-1C2E5B0F5E4A",
        value_snak(
            "P2044",
            "quantity",
            json!({
                "value": {
                    "amount": "+118",
                    "unit": "http://www.wikidata.org/entity/Q11573",
                    "upperBound": "+119",
                    "lowerBound": "+117"
                },
                "type": "quantity"
            }),
        ),
        "normal",
    ))
}

/// A property-valued claim.
pub(crate) fn q2112_p123456789() -> Claim {
    parse(statement(
        "Q2112$1F3B2C4D-0000-4000-8000-000000000001",
        value_snak(
            "P123456789",
            "wikibase-property",
            json!({
                "value": { "entity-type": "property", "numeric-id": 207614, "id": "P207614" },
                "type": "wikibase-entityid"
            }),
        ),
        "normal",
    ))
}

pub(crate) fn q2112_claims() -> ClaimsTable {
    let mut table = ClaimsTable::default();
    table.insert("P214".to_string(), vec![q2112_p214()]);
    table.insert("P190".to_string(), q2112_p190());
    table.insert("P625".to_string(), vec![q2112_p625()]);
    table.insert("P2044".to_string(), vec![q2112_p2044()]);
    table.insert("P123456789".to_string(), vec![q2112_p123456789()]);
    table
}

// =====================
// Q4115189 (sandbox item)
// =====================

/// Movement claims ranked deprecated, preferred, normal.
pub(crate) fn q4115189_p135() -> Vec<Claim> {
    parse(json!([
        statement(
            "Q4115189$7b4f0a3c-4d0e-2b3a-1c5d-6e7f8a9b0c1d",
            value_snak("P135", "wikibase-item", item_value("Q213454")),
            "deprecated"
        ),
        statement(
            "Q4115189$8c5a1b4d-5e1f-3c4b-2d6e-7f8a9b0c1d2e",
            value_snak("P135", "wikibase-item", item_value("Q2044250")),
            "preferred"
        ),
        statement(
            "Q4115189$9d6b2c5e-6f2a-4d5c-3e7f-8a9b0c1d2e3f",
            value_snak("P135", "wikibase-item", item_value("Q5843")),
            "normal"
        )
    ]))
}

/// `novalue`, `somevalue` and a plain external id, in that order.
pub(crate) fn empty_values_p3984() -> Vec<Claim> {
    parse(json!([
        statement(
            EMPTY_VALUE_IDS[0],
            json!({ "snaktype": "novalue", "property": "P3984", "datatype": "external-id" }),
            "normal"
        ),
        statement(
            EMPTY_VALUE_IDS[1],
            json!({ "snaktype": "somevalue", "property": "P3984", "datatype": "external-id" }),
            "normal"
        ),
        statement(
            EMPTY_VALUE_IDS[2],
            value_snak(
                "P3984",
                "external-id",
                json!({ "value": "bacasable", "type": "string" })
            ),
            "normal"
        )
    ]))
}

pub(crate) fn musical_notation_claim() -> Claim {
    parse(statement(
        "Q4115189$a1b2c3d4-0000-4000-8000-000000000002",
        value_snak(
            "P6604",
            "musical-notation",
            json!({ "value": "\\relative { c d e f g e }", "type": "string" }),
        ),
        "normal",
    ))
}

// =====================
// Q646148, Q1
// =====================

/// Second position held, qualified by the predecessor.
pub(crate) fn q646148_p39_1() -> Claim {
    let mut claim = statement(
        "Q646148$2E1A4C2B-5E0F-4A4F-9B8C-6D7E8F9A0B1C",
        value_snak("P39", "wikibase-item", item_value("Q11696")),
        "normal",
    );
    claim["qualifiers"] = json!({
        "P580": [value_snak("P580", "time", time_value("+2001-01-20T00:00:00Z", 11))],
        "P1365": [value_snak("P1365", "wikibase-item", item_value("Q312881"))]
    });
    claim["qualifiers-order"] = json!(["P1365", "P580"]);
    parse(claim)
}

/// Date of birth, day precision.
pub(crate) fn q646148_p569() -> Claim {
    parse(statement(
        "Q646148$9B8E1F1C-6A0E-4B4B-8C6F-1D2E3F4A5B6C",
        value_snak("P569", "time", time_value("+1939-11-08T00:00:00Z", 11)),
        "normal",
    ))
}

/// Start of the universe, far outside any calendar.
pub(crate) fn q1_p580() -> Claim {
    parse(statement(
        "Q1$789eef0c-4108-cdda-1a63-505cdd324564",
        value_snak("P580", "time", time_value("-13798000000-00-00T00:00:00Z", 3)),
        "normal",
    ))
}

/// Birth on a Julian leap day that the Gregorian calendar does not have.
pub(crate) fn julian_leap_day_claims() -> ClaimsTable {
    parse(json!({
        "P569": [statement(
            "Q1700$0D4C5A52-3B5E-4C1A-9F0B-2A7E6C9D8E11",
            value_snak(
                "P569",
                "time",
                calendar_time_value("+1700-02-29T00:00:00Z", 11, JULIAN)
            ),
            "normal",
        )]
    }))
}

// =====================
// Other shapes
// =====================

/// Claims from an old dump: entity ids without an `id` field.
pub(crate) fn old_format_claims() -> Vec<Claim> {
    parse(json!([
        {
            "mainsnak": {
                "snaktype": "value",
                "property": "P31",
                "datatype": "wikibase-item",
                "datavalue": {
                    "value": { "entity-type": "item", "numeric-id": 123 },
                    "type": "wikibase-entityid"
                }
            },
            "rank": "normal"
        },
        {
            "mainsnak": {
                "snaktype": "value",
                "property": "P1659",
                "datatype": "wikibase-property",
                "datavalue": {
                    "value": { "entity-type": "property", "numeric-id": 123 },
                    "type": "wikibase-entityid"
                }
            },
            "rank": "normal"
        }
    ]))
}

pub(crate) fn lexeme_claim() -> Claim {
    parse(statement(
        "Q1$c4a0b8f6-0000-4000-8000-000000000003",
        value_snak(
            "P5137",
            "wikibase-lexeme",
            json!({
                "value": { "entity-type": "lexeme", "numeric-id": 397, "id": "L397" },
                "type": "wikibase-entityid"
            }),
        ),
        "normal",
    ))
}

pub(crate) fn form_claim() -> Claim {
    parse(statement(
        "Q275937$5a0d1e2f-0000-4000-8000-000000000004",
        value_snak(
            "P8017",
            "wikibase-form",
            json!({
                "value": { "entity-type": "form", "id": "L252247-F2" },
                "type": "wikibase-entityid"
            }),
        ),
        "normal",
    ))
}

/// Lexeme L525's claims: one item, one sense.
pub(crate) fn l525_claims() -> ClaimsTable {
    parse(json!({
        "P5185": [statement(
            "L525$7a4c0d1e-0000-4000-8000-000000000005",
            value_snak("P5185", "wikibase-item", item_value("Q1775415")),
            "normal"
        )],
        "P5972": [statement(
            "L525$8b5d1e2f-0000-4000-8000-000000000006",
            value_snak(
                "P5972",
                "wikibase-sense",
                json!({
                    "value": { "entity-type": "sense", "id": "L512-S1" },
                    "type": "wikibase-entityid"
                })
            ),
            "normal"
        )]
    }))
}

pub(crate) fn monolingual_claim() -> Claim {
    parse(statement(
        "Q328212$1c2d3e4f-0000-4000-8000-000000000007",
        value_snak(
            "P1477",
            "monolingualtext",
            json!({
                "value": { "text": "Veronica Roth", "language": "es" },
                "type": "monolingualtext"
            }),
        ),
        "normal",
    ))
}

/// One claim per verbatim string datatype: `(datatype, value)`.
pub(crate) fn string_claims() -> Vec<(&'static str, Claim)> {
    [
        ("url", "http://veronicarothbooks.blogspot.com"),
        ("geo-shape", "Data:Rky/1277_Verlan_teollisuusympäristö.map"),
        ("tabular-data", "Data:Taipei Neihu District Population.tab"),
        ("commonsMedia", "Bielefeld Sparrenburg.jpg"),
        ("math", "E = mc^2"),
        ("string", "Bielefeld"),
    ]
    .into_iter()
    .map(|(datatype, text)| {
        let claim = parse(statement(
            "Q1$d5e6f7a8-0000-4000-8000-000000000008",
            value_snak("P1", datatype, json!({ "value": text, "type": "string" })),
            "normal",
        ));
        (datatype, claim)
    })
    .collect()
}

/// Authors of a paper: two known, two `somevalue`.
pub(crate) fn q22002395_p50() -> Vec<Claim> {
    let somevalue = json!({ "snaktype": "somevalue", "property": "P50", "datatype": "wikibase-item" });
    parse(json!([
        statement("Q22002395$A", value_snak("P50", "wikibase-item", item_value("Q21114929")), "normal"),
        statement("Q22002395$B", somevalue.clone(), "normal"),
        statement("Q22002395$C", value_snak("P50", "wikibase-item", item_value("Q21114930")), "normal"),
        statement("Q22002395$D", somevalue, "normal")
    ]))
}

pub(crate) fn snak(value: Value) -> Snak {
    parse(value)
}
