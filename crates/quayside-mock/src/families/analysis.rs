//! Data-analysis charts.
//!
//! Chart values are drawn fresh on every request; only the listing datasets
//! are fixed at router construction.

use chrono::{Datelike, Local};
use quayside_types::{HttpMethod, endpoints};
use rand::Rng;
use serde_json::{Value, json};

use crate::error::Result;
use crate::family::ResourceFamily;
use crate::route::{RouteTable, success_response_wrap};

const CATEGORIES: [&str; 3] = ["起重机", "叉车", "集装箱"];

const CATEGORY_SHARE: [(&str, i64, &str); 3] = [
    ("起重机", 36, "#8D4EDA"),
    ("叉车", 42, "#165DFF"),
    ("集装箱", 22, "#00B2FF"),
];

const RANKED_EQUIPMENT: [&str; 7] = [
    "门式起重机 QZ-50T",
    "电动叉车 CPCD-3T",
    "桥式起重机 QD-32T",
    "集装箱 40英尺",
    "塔式起重机 QTZ-80",
    "仓储叉车 CPD-2T",
    "汽车起重机 QY-25T",
];

pub(super) fn register(table: &mut RouteTable) -> Result<()> {
    let family = ResourceFamily::DataAnalysis;

    table.register(
        family,
        HttpMethod::Post,
        &regex::escape(endpoints::PUBLIC_OPINION_ANALYSIS),
        |request| {
            let quota = request.body_str("quota").unwrap_or("visitors");
            success_response_wrap(public_opinion(quota, Local::now().year()))
        },
    )?;
    table.register(
        family,
        HttpMethod::Get,
        &regex::escape(endpoints::CONTENT_PERIOD_ANALYSIS),
        |_| success_response_wrap(content_period()),
    )?;
    table.register(
        family,
        HttpMethod::Get,
        &regex::escape(endpoints::CONTENT_PUBLISH),
        |_| success_response_wrap(content_publish()),
    )?;
    table.register(
        family,
        HttpMethod::Get,
        &regex::escape(endpoints::POPULAR_AUTHOR_LIST),
        |_| success_response_wrap(popular_authors()),
    )
}

fn two_hour_axis() -> Vec<String> {
    (0..12).map(|i| format!("{}:00", i * 2)).collect()
}

fn line(suffix: &str, series: i32, low: u32, high: u32) -> Vec<Value> {
    let mut rng = rand::rng();
    (1..=12)
        .map(|i| {
            json!({
                "x": format!("{i}{suffix}"),
                "y": rng.random_range(low..=high),
                "name": series.to_string(),
            })
        })
        .collect()
}

/// `visitors`/`comment`: 24 monthly points over two years; `published`: 12
/// daily points; anything else: the category share pie.
fn public_opinion(quota: &str, year: i32) -> Value {
    match quota {
        "visitors" | "comment" => {
            let mut chart = line("月", year, 0, 100);
            chart.extend(line("月", year - 1, 0, 100));
            json!({ "count": 5670, "growth": 206.32, "chartData": chart })
        }
        "published" => {
            json!({ "count": 5670, "growth": 206.32, "chartData": line("日", year, 20, 100) })
        }
        _ => {
            let chart: Vec<Value> = CATEGORY_SHARE
                .iter()
                .map(|(name, value, color)| {
                    json!({ "name": name, "value": value, "itemStyle": { "color": color } })
                })
                .collect();
            json!({ "count": 1250, "growth": 18.5, "chartData": chart })
        }
    }
}

fn content_period() -> Value {
    let mut rng = rand::rng();
    let data: Vec<Value> = CATEGORIES
        .iter()
        .map(|name| {
            let value: Vec<u32> = (0..12).map(|_| rng.random_range(30..=90)).collect();
            json!({ "name": name, "value": value })
        })
        .collect();
    json!({ "xAxis": two_hour_axis(), "data": data })
}

fn content_publish() -> Value {
    let mut rng = rand::rng();
    let series: Vec<Value> = CATEGORIES
        .iter()
        .map(|name| {
            let y: Vec<u32> = (0..12).map(|_| rng.random_range(1000..=3000)).collect();
            json!({ "name": name, "x": two_hour_axis(), "y": y })
        })
        .collect();
    Value::Array(series)
}

fn popular_authors() -> Value {
    let mut rng = rand::rng();
    let list: Vec<Value> = RANKED_EQUIPMENT
        .iter()
        .zip(1..)
        .map(|(name, ranking)| {
            json!({
                "ranking": ranking,
                "author": name,
                "contentCount": rng.random_range(50..=300),
                "clickCount": rng.random_range(500..=5000),
            })
        })
        .collect();
    json!({ "list": list })
}
