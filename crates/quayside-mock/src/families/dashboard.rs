//! Workplace dashboard: rental trend and popular equipment.

use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use quayside_types::{ContentDataRecord, HttpMethod, PopularRecord, endpoints};
use serde_json::{Value, json};

use crate::error::Result;
use crate::family::ResourceFamily;
use crate::route::{RouteTable, success_response_wrap};

const TREND_POINTS: [f64; 8] = [58.0, 81.0, 53.0, 90.0, 64.0, 88.0, 49.0, 79.0];

const CRANES: [(&str, &str, i64); 5] = [
    ("156", "门式起重机 QZ-50T", 35),
    ("142", "桥式起重机 QD-32T", 22),
    ("128", "塔式起重机 QTZ-80", 9),
    ("98", "门座式起重机 MQ-25T", 17),
    ("76", "汽车起重机 QY-25T", 37),
];

const FORKLIFTS: [(&str, &str, i64); 5] = [
    ("203", "电动叉车 CPCD-3T", 15),
    ("187", "内燃叉车 CPC-5T", 26),
    ("165", "仓储叉车 CPD-2T", 9),
    ("134", "前移式叉车 CQD-3T", 0),
    ("98", "堆高车 CTY-2T", 4),
];

const CONTAINERS: [(&str, &str, i64); 5] = [
    ("89", "20英尺标准集装箱", 5),
    ("76", "40英尺标准集装箱", 17),
    ("65", "40英尺高柜集装箱", 30),
    ("54", "45英尺超长集装箱", 12),
    ("42", "冷藏集装箱", 2),
];

pub(super) fn register(table: &mut RouteTable) -> Result<()> {
    let family = ResourceFamily::Dashboard;

    table.register(
        family,
        HttpMethod::Get,
        &regex::escape(endpoints::CONTENT_DATA),
        |_| success_response_wrap(to_value(trend(Local::now().date_naive()))),
    )?;

    table.register(
        family,
        HttpMethod::Get,
        &regex::escape(endpoints::POPULAR_LIST),
        |request| {
            let kind = request.query_param("type").unwrap_or("crane");
            success_response_wrap(to_value(popular(kind)))
        },
    )
}

/// Eight points starting on the Friday before the week containing `today`.
fn trend(today: NaiveDate) -> Vec<ContentDataRecord> {
    let sunday = today - TimeDelta::days(i64::from(today.weekday().num_days_from_sunday()));
    TREND_POINTS
        .iter()
        .zip(-2i64..)
        .map(|(&y, offset)| ContentDataRecord {
            x: (sunday + TimeDelta::days(offset))
                .format("%Y-%m-%d")
                .to_string(),
            y,
        })
        .collect()
}

/// Popular rows for `crane`, `forklift` or `container`; anything else is
/// treated as `crane`.
fn popular(kind: &str) -> Vec<PopularRecord> {
    let rows = match kind {
        "forklift" => &FORKLIFTS,
        "container" => &CONTAINERS,
        _ => &CRANES,
    };
    rows.iter()
        .zip(1..)
        .map(|(&(clicks, title, increases), key)| PopularRecord {
            key,
            click_number: clicks.to_string(),
            title: title.to_string(),
            increases,
        })
        .collect()
}

fn to_value<T: serde::Serialize>(payload: T) -> Value {
    serde_json::to_value(payload).unwrap_or_else(|_| json!([]))
}
