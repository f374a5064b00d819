//! Named column mappings per sheet.
//!
//! Each logical field lists the exact (normalized) headers it is known by,
//! then a keyword query used when none of them is present.

use super::resolver::{find_column, ColumnQuery};
use super::table::SheetTable;

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub aliases: &'static [&'static str],
    pub fallback: ColumnQuery,
}

impl ColumnSpec {
    pub const fn new(aliases: &'static [&'static str], fallback: ColumnQuery) -> Self {
        Self { aliases, fallback }
    }

    /// Column name in `table`: exact alias first, then fuzzy fallback.
    pub fn resolve<'t>(&self, table: &'t SheetTable) -> Option<&'t str> {
        self.resolve_in(&table.columns)
    }

    pub fn resolve_in<'c>(&self, columns: &'c [String]) -> Option<&'c str> {
        self.aliases
            .iter()
            .find_map(|alias| columns.iter().find(|c| c.as_str() == *alias))
            .map(String::as_str)
            .or_else(|| find_column(columns, &self.fallback))
    }
}

pub mod calendar {
    use super::*;

    pub const AVAILABLE_DAYS: ColumnSpec = ColumnSpec::new(
        &["DIAS HABILES", "DIAS HABILES MES"],
        ColumnQuery::new(&["HABILES"]),
    );
    pub const ELAPSED_DAYS: ColumnSpec = ColumnSpec::new(
        &["DIAS TRANSCURRIDOS", "DIAS HABILES TRANSCURRIDOS"],
        ColumnQuery::new(&["TRANSCURRIDOS"]),
    );
}

pub mod services {
    use super::*;

    pub const LABOUR_BILLING: ColumnSpec = ColumnSpec::new(
        &["FACTURACION MO", "FACTURACION MANO DE OBRA"],
        ColumnQuery::new(&["FACT", "MO"]).excluding(&["OBJ"]),
    );
    pub const LABOUR_OBJECTIVE: ColumnSpec = ColumnSpec::new(
        &["OBJ FACTURACION MO", "OBJETIVO FACTURACION MO"],
        ColumnQuery::new(&["OBJ", "MO"]),
    );
    pub const CUSTOMER_UNITS: ColumnSpec = ColumnSpec::new(
        &["CPUS", "UNIDADES CLIENTE"],
        ColumnQuery::new(&["CPUS"]).excluding(&["OBJ"]),
    );
    pub const CUSTOMER_UNITS_OBJECTIVE: ColumnSpec = ColumnSpec::new(
        &["OBJ CPUS", "OBJETIVO CPUS"],
        ColumnQuery::new(&["OBJ", "CPUS"]),
    );
    pub const PREPAID_SERVICES: ColumnSpec = ColumnSpec::new(
        &["SERVICIOS PREPAGOS", "PREPAGOS"],
        ColumnQuery::new(&["PREPAG"]),
    );
}

pub mod workshop {
    use super::*;

    pub const AVAILABLE_HOURS: ColumnSpec = ColumnSpec::new(
        &["HORAS DISPONIBLES"],
        ColumnQuery::new(&["HORAS", "DISPON"]),
    );
    pub const WORKED_HOURS: ColumnSpec = ColumnSpec::new(
        &["HORAS TRABAJADAS"],
        ColumnQuery::new(&["HORAS", "TRABAJ"]),
    );
    pub const BILLED_HOURS: ColumnSpec = ColumnSpec::new(
        &["HORAS FACTURADAS"],
        ColumnQuery::new(&["HORAS", "FACTUR"]).excluding(&["OBJ"]),
    );
    pub const BILLED_HOURS_OBJECTIVE: ColumnSpec = ColumnSpec::new(
        &["OBJ HORAS FACTURADAS"],
        ColumnQuery::new(&["OBJ", "HORAS"]),
    );
}

pub mod parts {
    use super::*;

    pub const COUNTER_SALES: ColumnSpec = ColumnSpec::new(
        &["VENTA MOSTRADOR", "VENTA NETA MOSTRADOR"],
        ColumnQuery::new(&["VENTA", "MOSTRADOR"]).excluding(&["OBJ"]),
    );
    pub const WORKSHOP_SALES: ColumnSpec = ColumnSpec::new(
        &["VENTA TALLER", "VENTA NETA TALLER"],
        ColumnQuery::new(&["VENTA", "TALLER"]).excluding(&["OBJ"]),
    );
    pub const WHOLESALE_SALES: ColumnSpec = ColumnSpec::new(
        &["VENTA MAYORISTA", "VENTA NETA MAYORISTA"],
        ColumnQuery::new(&["VENTA", "MAYOR"]).excluding(&["OBJ"]),
    );
    pub const INTERNAL_SALES: ColumnSpec = ColumnSpec::new(
        &["VENTA INTERNA", "VENTA NETA INTERNA"],
        ColumnQuery::new(&["VENTA", "INTERN"]).excluding(&["OBJ"]),
    );
    pub const TOTAL_SALES: ColumnSpec = ColumnSpec::new(
        &["VENTA TOTAL", "VENTA NETA TOTAL"],
        ColumnQuery::new(&["VENTA", "TOTAL"]).excluding(&["OBJ"]),
    );
    pub const TOTAL_OBJECTIVE: ColumnSpec = ColumnSpec::new(
        &["OBJ VENTA TOTAL", "OBJETIVO VENTA TOTAL", "OBJ REPUESTOS"],
        ColumnQuery::new(&["OBJ"]).excluding(&["MOSTRADOR", "TALLER", "MAYOR", "INTERN"]),
    );
    pub const COUNTER_OBJECTIVE: ColumnSpec = ColumnSpec::new(
        &["OBJ VENTA MOSTRADOR", "OBJ MOSTRADOR"],
        ColumnQuery::new(&["OBJ", "MOSTRADOR"]),
    );
    pub const WORKSHOP_OBJECTIVE: ColumnSpec = ColumnSpec::new(
        &["OBJ VENTA TALLER", "OBJ TALLER"],
        ColumnQuery::new(&["OBJ", "TALLER"]),
    );
    pub const WHOLESALE_OBJECTIVE: ColumnSpec = ColumnSpec::new(
        &["OBJ VENTA MAYORISTA", "OBJ MAYORISTA"],
        ColumnQuery::new(&["OBJ", "MAYOR"]),
    );
    pub const TOTAL_COST: ColumnSpec = ColumnSpec::new(
        &["COSTO TOTAL", "COSTO VENTA TOTAL"],
        ColumnQuery::new(&["COSTO"]),
    );
    pub const HEALTHY_STOCK: ColumnSpec = ColumnSpec::new(
        &["STOCK SANO"],
        ColumnQuery::new(&["STOCK", "SANO"]),
    );
    pub const AT_RISK_STOCK: ColumnSpec = ColumnSpec::new(
        &["STOCK RIESGO", "STOCK EN RIESGO"],
        ColumnQuery::new(&["STOCK", "RIESGO"]),
    );
    pub const OBSOLETE_STOCK: ColumnSpec = ColumnSpec::new(
        &["STOCK OBSOLETO"],
        ColumnQuery::new(&["STOCK", "OBSOLET"]),
    );
}

/// Both bodyshop branches share one layout.
pub mod bodyshop {
    use super::*;

    pub const LABOUR_BILLING: ColumnSpec = ColumnSpec::new(
        &["FACTURACION MO", "FACTURACION MANO DE OBRA"],
        ColumnQuery::new(&["FACT", "MO"]).excluding(&["OBJ"]),
    );
    pub const LABOUR_OBJECTIVE: ColumnSpec = ColumnSpec::new(
        &["OBJ MO", "OBJ FACTURACION MO"],
        ColumnQuery::new(&["OBJ", "MO"]),
    );
    pub const PARTS_BILLING: ColumnSpec = ColumnSpec::new(
        &["FACTURACION REPUESTOS"],
        ColumnQuery::new(&["FACT", "REPUESTO"]).excluding(&["OBJ"]),
    );
    pub const PANELS: ColumnSpec = ColumnSpec::new(
        &["PANOS", "CANTIDAD PANOS"],
        ColumnQuery::new(&["PANOS"]).excluding(&["OBJ"]),
    );
    pub const PANELS_OBJECTIVE: ColumnSpec = ColumnSpec::new(
        &["OBJ PANOS"],
        ColumnQuery::new(&["OBJ", "PANOS"]),
    );
    pub const THIRD_PARTY_BILLING: ColumnSpec = ColumnSpec::new(
        &["FACTURACION TERCEROS"],
        ColumnQuery::new(&["TERCEROS"]).excluding(&["OBJ"]),
    );
}

/// Vehicle identifier of the uploaded IRPV files.
pub mod uploads {
    use super::*;

    pub const VIN: ColumnSpec = ColumnSpec::new(
        &["VIN", "NRO VIN", "CHASIS", "NRO CHASIS", "NUMERO CHASIS"],
        ColumnQuery::new(&["VIN"]).excluding(&["PROVINCIA"]),
    );
    /// Used when neither the aliases nor the `VIN` fragment match
    pub const CHASSIS_FALLBACK: ColumnQuery = ColumnQuery::new(&["CHASIS"]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_alias_beats_fuzzy_order() {
        // The fuzzy query would hit "FACT MO TALLER" first
        let columns = cols(&["FACT MO TALLER", "FACTURACION MO"]);
        assert_eq!(services::LABOUR_BILLING.resolve_in(&columns), Some("FACTURACION MO"));
    }

    #[test]
    fn test_fuzzy_fallback() {
        let columns = cols(&["FECHA", "FACT MO NETA", "OBJ FACT MO"]);
        assert_eq!(services::LABOUR_BILLING.resolve_in(&columns), Some("FACT MO NETA"));
        assert_eq!(services::LABOUR_OBJECTIVE.resolve_in(&columns), Some("OBJ FACT MO"));
    }

    #[test]
    fn test_parts_objective_skips_channel_objectives() {
        let columns = cols(&["OBJ MOSTRADOR", "OBJ TALLER", "OBJ GENERAL"]);
        assert_eq!(parts::TOTAL_OBJECTIVE.resolve_in(&columns), Some("OBJ GENERAL"));
        assert_eq!(parts::COUNTER_OBJECTIVE.resolve_in(&columns), Some("OBJ MOSTRADOR"));
    }

    #[test]
    fn test_vin_alias_skips_province() {
        let columns = cols(&["PROVINCIA", "VIN", "FECHA VENTA"]);
        assert_eq!(uploads::VIN.resolve_in(&columns), Some("VIN"));

        let columns = cols(&["PROVINCIA", "VIN VEHICULO"]);
        assert_eq!(uploads::VIN.resolve_in(&columns), Some("VIN VEHICULO"));

        let columns = cols(&["PROVINCIA", "FECHA"]);
        assert_eq!(uploads::VIN.resolve_in(&columns), None);
    }

    #[test]
    fn test_unresolved_field() {
        let columns = cols(&["FECHA"]);
        assert_eq!(parts::HEALTHY_STOCK.resolve_in(&columns), None);
    }
}
