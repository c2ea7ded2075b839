// src/services/aggregation.rs
//
// Motor de agregação: funções puras sobre linhas já buscadas.
// Nada aqui acessa banco, guarda estado ou falha; cada chamada recalcula tudo.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::Decimal;

use crate::models::{
    dashboard::{ChartConfigEntry, ChartData, DashboardMetrics, DerivedStats, OverviewChartData},
    invoice::{ingest_raw_invoices, InvoiceProjection, InvoiceStatus, NamedInvoice, RawInvoiceRow},
    supplier::SupplierProjection,
};

pub const LAST_MONTH_DAYS: i64 = 30;
pub const OVERVIEW_MONTHS: u32 = 6;
pub const TOP_N: usize = 5;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// As quatro coleções do dashboard, buscadas de forma independente.
#[derive(Debug, Clone, Copy)]
pub struct DashboardDatasets<'a> {
    pub suppliers: &'a [SupplierProjection],
    pub invoices: &'a [InvoiceProjection],
    pub paid_invoices: &'a [InvoiceProjection],
    pub unpaid_invoices: &'a [InvoiceProjection],
}

/// Corte da janela "últimos 30 dias".
pub fn dashboard_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(LAST_MONTH_DAYS)
}

fn created_after(created_at: Option<DateTime<Utc>>, cutoff: DateTime<Utc>) -> bool {
    created_at.is_some_and(|ts| ts > cutoff)
}

// =============================================================================
//  1. ESTATÍSTICA POR ENTIDADE
// =============================================================================

/// Conta e soma as faturas com status exatamente `unpaid`.
///
/// ATENÇÃO: soma o `amount` bruto, sem descontar `discount_amount`. Os outros
/// agregadores usam o valor líquido; a assimetria é herdada e fica assim até
/// alguém confirmar qual das duas é a intenção.
pub fn unpaid_stats(invoices: &[InvoiceProjection]) -> DerivedStats {
    invoices
        .iter()
        .filter(|invoice| invoice.status == Some(InvoiceStatus::Unpaid))
        .fold(DerivedStats::default(), |mut stats, invoice| {
            stats.unpaid_invoice_count += 1;
            stats.unpaid_invoice_total += invoice.amount;
            stats
        })
}

/// Faturas cruas de uma entidade -> estatística, passando pela fronteira de ingestão.
pub fn entity_unpaid_stats(raw: &[RawInvoiceRow]) -> DerivedStats {
    unpaid_stats(&ingest_raw_invoices(raw))
}

// =============================================================================
//  2. CARDS DO DASHBOARD
// =============================================================================

struct AmountTotals {
    total: Decimal,
    last_month: Decimal,
}

// Valor líquido (amount - desconto), diferente de `unpaid_stats`.
fn net_totals(invoices: &[InvoiceProjection], cutoff: DateTime<Utc>) -> AmountTotals {
    invoices.iter().fold(
        AmountTotals {
            total: Decimal::ZERO,
            last_month: Decimal::ZERO,
        },
        |mut acc, invoice| {
            let net = invoice.net_amount();
            acc.total += net;
            if created_after(invoice.created_at, cutoff) {
                acc.last_month += net;
            }
            acc
        },
    )
}

pub fn dashboard_metrics(data: DashboardDatasets<'_>, cutoff: DateTime<Utc>) -> DashboardMetrics {
    let suppliers_last_month = data
        .suppliers
        .iter()
        .filter(|s| created_after(s.created_at, cutoff))
        .count();
    let invoices_last_month = data
        .invoices
        .iter()
        .filter(|i| created_after(i.created_at, cutoff))
        .count();

    let paid = net_totals(data.paid_invoices, cutoff);
    let unpaid = net_totals(data.unpaid_invoices, cutoff);

    DashboardMetrics {
        total_suppliers: data.suppliers.len() as i64,
        suppliers_last_month: suppliers_last_month as i64,
        total_invoices: data.invoices.len() as i64,
        invoices_last_month: invoices_last_month as i64,
        paid_invoices_amount: paid.total,
        paid_invoices_last_month: paid.last_month,
        unpaid_invoices_amount: unpaid.total,
        unpaid_invoices_last_month: unpaid.last_month,
    }
}

// =============================================================================
//  3. SÉRIE MENSAL PAGO / NÃO PAGO
// =============================================================================

// (ano, mês 0..12) recuando `back` meses; o mês sai sempre de `rem_euclid(12)`
fn shift_month(year: i32, month0: u32, back: u32) -> (i32, u32) {
    let index = year * 12 + month0 as i32 - back as i32;
    (index.div_euclid(12), index.rem_euclid(12) as u32)
}

// Rótulo "Mon YYYY", ex.: "Oct 2026". Só recebe meses vindos de `shift_month`.
fn month_label(year: i32, month0: u32) -> String {
    let abbreviation = MONTH_ABBREVIATIONS[month0 as usize];
    format!("{abbreviation} {year}")
}

/// Seis meses terminando no mês de `now` (UTC), em ordem cronológica.
///
/// Faturas fora da janela são ignoradas. Status `partial`, `cancelled` ou
/// nulo contam como "não pago" neste gráfico.
pub fn monthly_overview(invoices: &[InvoiceProjection], now: DateTime<Utc>) -> Vec<OverviewChartData> {
    let keys: Vec<(i32, u32)> = (0..OVERVIEW_MONTHS)
        .rev()
        .map(|back| shift_month(now.year(), now.month0(), back))
        .collect();

    let mut buckets: Vec<OverviewChartData> = keys
        .iter()
        .map(|&(year, month0)| OverviewChartData {
            month: month_label(year, month0),
            paid: Decimal::ZERO,
            unpaid: Decimal::ZERO,
        })
        .collect();

    for invoice in invoices {
        let Some(created_at) = invoice.created_at else {
            continue;
        };
        let key = (created_at.year(), created_at.month0());
        let Some(index) = keys.iter().position(|k| *k == key) else {
            continue;
        };

        let amount = invoice.net_amount();
        if invoice.status == Some(InvoiceStatus::Paid) {
            buckets[index].paid += amount;
        } else {
            buckets[index].unpaid += amount;
        }
    }

    buckets
}

// =============================================================================
//  4. RANKING TOP-N
// =============================================================================

/// Agrupa por nome, soma o valor líquido e devolve os 5 maiores.
///
/// Nome nulo fica de fora (não existe grupo "Desconhecido"). Empates mantêm a
/// ordem da primeira aparição do nome na entrada (`sort_by` é estável).
pub fn top_entities(invoices: &[NamedInvoice]) -> Vec<ChartData> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Decimal)> = Vec::new();

    for invoice in invoices {
        let Some(name) = invoice.name.as_deref() else {
            continue;
        };
        let amount = invoice.net_amount();
        match positions.get(name) {
            Some(&index) => groups[index].1 += amount,
            None => {
                positions.insert(name, groups.len());
                groups.push((name, amount));
            }
        }
    }

    groups.sort_by(|a, b| b.1.cmp(&a.1));

    groups
        .into_iter()
        .take(TOP_N)
        .enumerate()
        .map(|(rank, (name, total))| ChartData {
            name: name.to_string(),
            total,
            fill: format!("chart-{}", rank + 1),
        })
        .collect()
}

/// Legenda/config de cores para o gráfico de ranking.
pub fn chart_config(data: &[ChartData]) -> Vec<ChartConfigEntry> {
    data.iter()
        .map(|entry| ChartConfigEntry {
            key: entry.name.clone(),
            label: entry.name.clone(),
            color: format!("var(--{})", entry.fill),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn invoice(
        status: Option<InvoiceStatus>,
        amount: Decimal,
        discount_amount: Option<Decimal>,
        created_at: Option<DateTime<Utc>>,
    ) -> InvoiceProjection {
        InvoiceProjection {
            status,
            amount,
            discount_amount,
            created_at,
        }
    }

    fn named(name: Option<&str>, amount: Decimal) -> NamedInvoice {
        NamedInvoice {
            name: name.map(str::to_string),
            amount,
            discount_amount: None,
        }
    }

    // --- unpaid_stats ---

    #[test]
    fn unpaid_stats_counts_only_unpaid() {
        let invoices = vec![
            invoice(Some(InvoiceStatus::Unpaid), dec!(100), None, None),
            invoice(Some(InvoiceStatus::Unpaid), dec!(50), None, None),
            invoice(Some(InvoiceStatus::Paid), dec!(30), None, None),
        ];

        let stats = unpaid_stats(&invoices);

        assert_eq!(stats.unpaid_invoice_count, 2);
        assert_eq!(stats.unpaid_invoice_total, dec!(150));
    }

    #[test]
    fn unpaid_stats_ignores_discount() {
        let invoices = vec![invoice(Some(InvoiceStatus::Unpaid), dec!(100), Some(dec!(40)), None)];

        assert_eq!(unpaid_stats(&invoices).unpaid_invoice_total, dec!(100));
    }

    #[test]
    fn unpaid_stats_skips_other_and_missing_status() {
        let invoices = vec![
            invoice(Some(InvoiceStatus::Partial), dec!(10), None, None),
            invoice(Some(InvoiceStatus::Cancelled), dec!(10), None, None),
            invoice(None, dec!(10), None, None),
        ];

        assert_eq!(unpaid_stats(&invoices), DerivedStats::default());
        assert_eq!(unpaid_stats(&[]), DerivedStats::default());
    }

    #[test]
    fn entity_stats_drop_unknown_status_rows() {
        let raw = vec![
            RawInvoiceRow { status: Some("unpaid".into()), amount: Some(dec!(100)) },
            RawInvoiceRow { status: Some("unpaid".into()), amount: None },
            RawInvoiceRow { status: Some("UNPAID".into()), amount: Some(dec!(7)) },
            RawInvoiceRow { status: None, amount: Some(dec!(9)) },
        ];

        let stats = entity_unpaid_stats(&raw);

        assert_eq!(stats.unpaid_invoice_count, 2);
        assert_eq!(stats.unpaid_invoice_total, dec!(100));
    }

    // --- dashboard_metrics ---

    #[test]
    fn paid_invoice_outside_window_only_counts_in_total() {
        let paid = vec![invoice(
            Some(InvoiceStatus::Paid),
            dec!(200),
            Some(dec!(20)),
            Some(now() - Duration::days(40)),
        )];
        let data = DashboardDatasets {
            suppliers: &[],
            invoices: &[],
            paid_invoices: &paid,
            unpaid_invoices: &[],
        };

        let metrics = dashboard_metrics(data, dashboard_cutoff(now()));

        assert_eq!(metrics.paid_invoices_amount, dec!(180));
        assert_eq!(metrics.paid_invoices_last_month, Decimal::ZERO);
    }

    #[test]
    fn metrics_count_rows_strictly_after_cutoff() {
        let cutoff = dashboard_cutoff(now());
        let suppliers = vec![
            SupplierProjection { created_at: Some(now() - Duration::days(2)) },
            SupplierProjection { created_at: Some(cutoff) },
            SupplierProjection { created_at: None },
        ];
        let invoices = vec![
            invoice(Some(InvoiceStatus::Paid), dec!(1), None, Some(now())),
            invoice(None, dec!(1), None, None),
        ];
        let unpaid = vec![
            invoice(Some(InvoiceStatus::Unpaid), dec!(70), Some(dec!(5)), Some(now() - Duration::days(1))),
            invoice(Some(InvoiceStatus::Unpaid), dec!(30), None, Some(now() - Duration::days(31))),
        ];
        let data = DashboardDatasets {
            suppliers: &suppliers,
            invoices: &invoices,
            paid_invoices: &[],
            unpaid_invoices: &unpaid,
        };

        let metrics = dashboard_metrics(data, cutoff);

        assert_eq!(metrics.total_suppliers, 3);
        assert_eq!(metrics.suppliers_last_month, 1);
        assert_eq!(metrics.total_invoices, 2);
        assert_eq!(metrics.invoices_last_month, 1);
        assert_eq!(metrics.unpaid_invoices_amount, dec!(95));
        assert_eq!(metrics.unpaid_invoices_last_month, dec!(65));
        assert!(metrics.unpaid_invoices_amount >= metrics.unpaid_invoices_last_month);
    }

    #[test]
    fn empty_datasets_give_zeroed_metrics() {
        let data = DashboardDatasets {
            suppliers: &[],
            invoices: &[],
            paid_invoices: &[],
            unpaid_invoices: &[],
        };

        assert_eq!(dashboard_metrics(data, dashboard_cutoff(now())), DashboardMetrics::default());
    }

    // --- monthly_overview ---

    #[test]
    fn overview_has_six_chronological_months_even_when_empty() {
        let series = monthly_overview(&[], now());

        let labels: Vec<&str> = series.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(
            labels,
            ["May 2026", "Jun 2026", "Jul 2026", "Aug 2026", "Sep 2026", "Oct 2026"]
        );
        assert!(series.iter().all(|m| m.paid.is_zero() && m.unpaid.is_zero()));
    }

    #[test]
    fn overview_crosses_year_boundary() {
        let january = Utc.with_ymd_and_hms(2027, 1, 5, 0, 0, 0).unwrap();

        let labels: Vec<String> = monthly_overview(&[], january).into_iter().map(|m| m.month).collect();

        assert_eq!(
            labels,
            ["Aug 2026", "Sep 2026", "Oct 2026", "Nov 2026", "Dec 2026", "Jan 2027"]
        );
    }

    #[test]
    fn overview_folds_non_paid_into_unpaid_and_drops_old_rows() {
        let this_month = Utc.with_ymd_and_hms(2026, 10, 2, 9, 0, 0).unwrap();
        let may = Utc.with_ymd_and_hms(2026, 5, 31, 23, 0, 0).unwrap();
        let last_year = Utc.with_ymd_and_hms(2025, 10, 2, 9, 0, 0).unwrap();
        let invoices = vec![
            invoice(Some(InvoiceStatus::Paid), dec!(100), Some(dec!(10)), Some(this_month)),
            invoice(Some(InvoiceStatus::Partial), dec!(40), None, Some(this_month)),
            invoice(Some(InvoiceStatus::Cancelled), dec!(5), None, Some(this_month)),
            invoice(Some(InvoiceStatus::Unpaid), dec!(25), None, Some(may)),
            invoice(Some(InvoiceStatus::Paid), dec!(999), None, Some(last_year)),
            invoice(Some(InvoiceStatus::Paid), dec!(999), None, None),
        ];

        let series = monthly_overview(&invoices, now());

        assert_eq!(series.len(), 6);
        assert_eq!(series[0].month, "May 2026");
        assert_eq!(series[0].unpaid, dec!(25));
        assert_eq!(series[5].paid, dec!(90));
        assert_eq!(series[5].unpaid, dec!(45));
        let paid_total: Decimal = series.iter().map(|m| m.paid).sum();
        assert_eq!(paid_total, dec!(90));
    }

    #[test]
    fn month_keys_stay_in_range_across_years() {
        assert_eq!(shift_month(2026, 9, 0), (2026, 9));
        assert_eq!(shift_month(2027, 0, 1), (2026, 11));
        assert_eq!(shift_month(2027, 0, 13), (2025, 11));
        assert_eq!(month_label(2026, 9), "Oct 2026");
        assert_eq!(month_label(2027, 0), "Jan 2027");
        assert_eq!(month_label(2026, 11), "Dec 2026");
    }

    // --- top_entities ---

    #[test]
    fn top_entities_groups_by_name() {
        let invoices = vec![
            named(Some("Acme"), dec!(100)),
            named(Some("Acme"), dec!(50)),
            named(Some("Beta"), dec!(30)),
        ];

        let top = top_entities(&invoices);

        assert_eq!(
            top,
            vec![
                ChartData { name: "Acme".into(), total: dec!(150), fill: "chart-1".into() },
                ChartData { name: "Beta".into(), total: dec!(30), fill: "chart-2".into() },
            ]
        );
    }

    #[test]
    fn top_entities_excludes_missing_names_and_truncates() {
        let mut invoices: Vec<NamedInvoice> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .zip(1..)
            .map(|(name, amount)| named(Some(*name), Decimal::from(amount)))
            .collect();
        invoices.push(named(None, dec!(1000)));

        let top = top_entities(&invoices);

        assert_eq!(top.len(), TOP_N);
        assert_eq!(top[0].name, "g");
        assert!(top.windows(2).all(|w| w[0].total >= w[1].total));
        assert!(top.iter().all(|entry| entry.total < dec!(1000)));
        let fills: Vec<&str> = top.iter().map(|e| e.fill.as_str()).collect();
        assert_eq!(fills, ["chart-1", "chart-2", "chart-3", "chart-4", "chart-5"]);
    }

    #[test]
    fn top_entities_nets_discount() {
        let invoices = vec![NamedInvoice {
            name: Some("Acme".into()),
            amount: dec!(100),
            discount_amount: Some(dec!(25)),
        }];

        assert_eq!(top_entities(&invoices)[0].total, dec!(75));
    }

    #[test]
    fn top_entities_ties_keep_first_occurrence() {
        let invoices = vec![
            named(Some("Zeta"), dec!(10)),
            named(Some("Alpha"), dec!(10)),
            named(Some("Mid"), dec!(20)),
        ];

        let names: Vec<String> = top_entities(&invoices).into_iter().map(|e| e.name).collect();

        assert_eq!(names, ["Mid", "Zeta", "Alpha"]);
    }

    #[test]
    fn chart_config_uses_css_variable_per_fill() {
        let config = chart_config(&top_entities(&[named(Some("Acme"), dec!(1))]));

        assert_eq!(config.len(), 1);
        assert_eq!(config[0].label, "Acme");
        assert_eq!(config[0].color, "var(--chart-1)");
    }

    #[test]
    fn aggregators_are_idempotent() {
        let invoices = vec![
            invoice(Some(InvoiceStatus::Unpaid), dec!(12), Some(dec!(2)), Some(now())),
            invoice(Some(InvoiceStatus::Paid), dec!(8), None, Some(now())),
        ];
        let ranked = vec![named(Some("Acme"), dec!(5)), named(Some("Beta"), dec!(5))];

        assert_eq!(unpaid_stats(&invoices), unpaid_stats(&invoices));
        assert_eq!(monthly_overview(&invoices, now()), monthly_overview(&invoices, now()));
        assert_eq!(top_entities(&ranked), top_entities(&ranked));
    }
}
