//! Streaming generator for customer and order rows.
//!
//! Rows are never materialized: each one is formatted into a single
//! statement and written straight to the sink. Ids are assigned
//! sequentially from 1; an order's `customer_id` is drawn uniformly from
//! `1..=customer_count`.

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::provider::TextProvider;
use crate::statement;
use crate::writer::StatementWriter;
use rand::seq::index;
use rand::Rng;
use std::io::Write;

/// Counts of everything written during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub schema_statements: u64,
    pub customers: u64,
    pub products: u64,
    pub orders: u64,
    pub order_products: u64,
    /// Interpolated values containing a single quote
    pub quoted_values: u64,
}

impl GenerateStats {
    pub fn total_statements(&self) -> u64 {
        [
            self.customers,
            self.products,
            self.orders,
            self.order_products,
        ]
        .into_iter()
        .fold(self.schema_statements, u64::saturating_add)
    }
}

type ProgressFn = Box<dyn Fn(u64)>;

pub struct Generator<P: TextProvider, R: Rng> {
    config: GeneratorConfig,
    provider: P,
    rng: R,
    progress: Option<ProgressFn>,
    units_done: u64,
}

impl<P: TextProvider, R: Rng> Generator<P, R> {
    /// Create a generator; fails if the configuration is unusable
    pub fn new(config: GeneratorConfig, provider: P, rng: R) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Self {
            config,
            provider,
            rng,
            progress: None,
            units_done: 0,
        })
    }

    /// Register a callback receiving the number of completed progress units.
    ///
    /// One unit is one customer, product or order row, plus one per order
    /// when its product links are written.
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(u64) + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Total progress units for a full run, saturating at `u64::MAX`
    pub fn total_units(&self) -> u64 {
        let c = &self.config;
        let link_units = if c.product_count > 0 { c.order_count } else { 0 };
        c.customer_count
            .saturating_add(c.product_count)
            .saturating_add(c.order_count)
            .saturating_add(link_units)
    }

    /// Write the whole dataset to `out`.
    ///
    /// Order: schema prelude (optional), customers, products (optional),
    /// orders, order-product links (optional). The writer is flushed at the
    /// end; on error, statements already written stay in the sink.
    pub fn generate<W: Write>(
        &mut self,
        out: &mut StatementWriter<W>,
    ) -> Result<GenerateStats, GenerateError> {
        log::debug!(
            "generating {} customers, {} orders, {} products (schema: {})",
            self.config.customer_count,
            self.config.order_count,
            self.config.product_count,
            self.config.include_schema
        );

        self.units_done = 0;
        let mut stats = GenerateStats::default();

        if self.config.include_schema {
            for stmt in statement::schema_statements(self.config.product_count > 0) {
                out.write_statement(&stmt)?;
                stats.schema_statements += 1;
            }
        }

        self.generate_customers(out, &mut stats)?;
        self.generate_products(out, &mut stats)?;
        self.generate_orders(out, &mut stats)?;
        self.generate_order_products(out, &mut stats)?;

        out.flush()?;

        if stats.quoted_values > 0 {
            log::warn!(
                "{} generated value(s) contain a single quote and were not escaped; \
                 the affected statements are not valid SQL",
                stats.quoted_values
            );
        }

        Ok(stats)
    }

    /// Convenience wrapper collecting the output in memory
    pub fn generate_to_string(&mut self) -> Result<(String, GenerateStats), GenerateError> {
        let mut writer = StatementWriter::new(Vec::new());
        let stats = self.generate(&mut writer)?;
        let bytes = writer.into_inner()?;
        Ok((String::from_utf8_lossy(&bytes).into_owned(), stats))
    }

    fn generate_customers<W: Write>(
        &mut self,
        out: &mut StatementWriter<W>,
        stats: &mut GenerateStats,
    ) -> Result<(), GenerateError> {
        for id in 1..=self.config.customer_count {
            let name = self
                .provider
                .next_full_name()
                .map_err(|e| GenerateError::provider("name", e))?;
            if statement::needs_escaping(&name) {
                stats.quoted_values += 1;
            }
            out.write_statement(&statement::customer_insert(id, &name))?;
            stats.customers += 1;
            self.tick();
        }
        Ok(())
    }

    fn generate_products<W: Write>(
        &mut self,
        out: &mut StatementWriter<W>,
        stats: &mut GenerateStats,
    ) -> Result<(), GenerateError> {
        for id in 1..=self.config.product_count {
            let description = self.next_product_name()?;
            if statement::needs_escaping(&description) {
                stats.quoted_values += 1;
            }
            out.write_statement(&statement::product_insert(id, &description))?;
            stats.products += 1;
            self.tick();
        }
        Ok(())
    }

    fn generate_orders<W: Write>(
        &mut self,
        out: &mut StatementWriter<W>,
        stats: &mut GenerateStats,
    ) -> Result<(), GenerateError> {
        let customers = self.config.customer_count;
        for id in 1..=self.config.order_count {
            let customer_id = self.rng.random_range(1..=customers);
            let description = self.next_product_name()?;
            if statement::needs_escaping(&description) {
                stats.quoted_values += 1;
            }
            out.write_statement(&statement::order_insert(id, &description, customer_id))?;
            stats.orders += 1;
            self.tick();
        }
        Ok(())
    }

    /// Link every order to between 1 and the configured bound of distinct
    /// products, ascending by product id.
    fn generate_order_products<W: Write>(
        &mut self,
        out: &mut StatementWriter<W>,
        stats: &mut GenerateStats,
    ) -> Result<(), GenerateError> {
        let products = self.config.product_count;
        if products == 0 {
            return Ok(());
        }
        let bound = self.config.products_per_order_bound();

        for order_id in 1..=self.config.order_count {
            let amount = self.rng.random_range(1..=bound) as usize;
            let mut picked = index::sample(&mut self.rng, products as usize, amount).into_vec();
            picked.sort_unstable();
            for idx in picked {
                let product_id = idx as u64 + 1;
                out.write_statement(&statement::order_product_insert(order_id, product_id))?;
                stats.order_products += 1;
            }
            self.tick();
        }
        Ok(())
    }

    fn next_product_name(&mut self) -> Result<String, GenerateError> {
        self.provider
            .next_product_name()
            .map_err(|e| GenerateError::provider("product name", e))
    }

    fn tick(&mut self) {
        self.units_done += 1;
        if let Some(ref callback) = self.progress {
            callback(self.units_done);
        }
    }
}
