// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 初始化 Prometheus 指标导出器
///
/// 未启用或监听地址无效时只记录日志，指标宏在没有 recorder 时为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!("search_requests_total", "Total number of article searches");
    describe_counter!(
        "search_hits_total",
        "Number of searches that matched at least one article"
    );
    describe_histogram!("search_result_size", "Number of articles returned per search");
    describe_counter!(
        "category_listings_total",
        "Total number of category listings, labelled by whether counts were requested"
    );

    info!("Metrics exporter listening on {}", addr);
}
