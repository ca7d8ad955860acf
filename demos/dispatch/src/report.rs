//! Plain-text renderings of a planned route and of the network.

use std::fmt;

use lro_network::Network;
use lro_routing::RouteReport;

const RULE: &str = "===================================";
const THIN: &str = "───────────────────────────────────";

/// Route summary: numbered stops, then totals over every metric.
pub fn render_route(report: &RouteReport) -> String {
    RouteText(report).to_string()
}

/// Every location with its layout position, then every route once.
pub fn render_network(network: &Network) -> String {
    NetworkText(network).to_string()
}

struct RouteText<'a>(&'a RouteReport);

impl fmt::Display for RouteText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RouteText(report) = *self;
        let path = report.plan.path();
        let totals = &report.totals;

        writeln!(f, "{RULE}\n  OPTIMAL ROUTE CALCULATION\n{RULE}\n")?;
        writeln!(f, "Optimization: {}\n", path.metric().as_str().to_uppercase())?;
        writeln!(f, "Route Path:")?;
        for (i, loc) in path.locations().iter().enumerate() {
            writeln!(f, "  {}. {loc}", i + 1)?;
        }

        writeln!(f, "\n{THIN}\nSUMMARY:\n{THIN}")?;
        writeln!(f, "Total Distance: {:.1} km", totals.distance)?;
        writeln!(f, "Total Time:     {:.0} min", totals.time)?;
        writeln!(f, "Total Cost:     ${:.2}", totals.cost)?;
        writeln!(f, "Stops Visited:  {}", report.plan.visited().len())?;
        if !report.plan.is_complete() {
            let stranded: Vec<&str> = report.plan.stranded().iter().map(|s| s.as_str()).collect();
            writeln!(f, "UNREACHABLE:    {}", stranded.join(", "))?;
        }
        writeln!(f, "{RULE}")
    }
}

struct NetworkText<'a>(&'a Network);

impl fmt::Display for NetworkText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let NetworkText(network) = *self;
        writeln!(f, "Locations ({}):", network.location_count())?;
        for id in network.locations() {
            let pos = network.position(id.as_str()).unwrap_or_default();
            writeln!(f, "  {id:<12} {pos}")?;
        }
        writeln!(f, "Routes ({}):", network.route_count())?;
        for (a, b, w) in network.routes() {
            writeln!(f, "  {a} ↔ {b}: {w}")?;
        }
        Ok(())
    }
}
