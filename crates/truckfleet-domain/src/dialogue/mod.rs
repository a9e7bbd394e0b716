//! Interactive fleet dialogue
//!
//! Collects the customer's identity and a fleet of trucks, validating every
//! answer and letting the customer correct records until they confirm.
//! Every step returns an [`Outcome`]; a quit keyword anywhere surfaces as
//! `Outcome::Cancelled` to the caller, which decides what to persist.

mod channel;
pub mod console;

use std::time::Duration;

use tracing::{debug, info};
use truckfleet_types::{proceed, Outcome, Result};

use crate::model::{ConversationLog, Fleet, Identity, TruckRecord};
use crate::rules::FieldRules;
use channel::Channel;

pub use console::Console;
#[cfg(any(test, feature = "test-util"))]
pub use console::ScriptedConsole;

#[derive(Debug, Clone)]
pub struct DialogueOptions {
    /// Only "y"/"yes" confirm; unrecognized answers are asked again
    pub strict_confirmation: bool,
    /// Invalid answers allowed per question before the session ends
    pub max_attempts: Option<u32>,
    pub pause: Duration,
}

impl Default for DialogueOptions {
    fn default() -> Self {
        Self {
            strict_confirmation: true,
            max_attempts: None,
            pause: Duration::from_millis(500),
        }
    }
}

pub struct Dialogue<C> {
    channel: Channel<C>,
    rules: FieldRules,
    options: DialogueOptions,
}

impl<C: Console> Dialogue<C> {
    pub fn new(console: C, options: DialogueOptions) -> Result<Self> {
        Ok(Self {
            channel: Channel::new(console, options.max_attempts, options.pause),
            rules: FieldRules::standard()?,
            options,
        })
    }

    pub fn log(&self) -> &ConversationLog {
        self.channel.log()
    }

    pub fn console(&self) -> &C {
        self.channel.console()
    }

    pub fn into_parts(self) -> (C, ConversationLog) {
        self.channel.into_parts()
    }

    pub fn greet(&mut self) -> Result<()> {
        self.channel
            .say("Hello, I am here to help you organize your fleet.")?;
        self.channel.say(
            "If at any point you want to quit from the program, just type \"q\" or \"quit\".",
        )?;
        self.channel.pause();
        self.channel.say("Let us first collect basic information.")?;
        self.channel.pause();
        Ok(())
    }

    pub fn collect_identity(&mut self) -> Result<Outcome<Identity>> {
        let name = proceed!(self.channel.ask("Please tell me your name: "));
        let fleet_id = proceed!(self
            .channel
            .ask("What is the designation of this fleet? "));
        Ok(Outcome::Completed(Identity { name, fleet_id }))
    }

    /// Collect one truck, starting over until the customer confirms it
    pub fn collect_truck(&mut self, number: usize) -> Result<Outcome<TruckRecord>> {
        loop {
            self.channel.blank_line()?;
            self.channel
                .say(&format!("Please provide details for vehicle nr. {}.", number))?;
            let truck = proceed!(self.collect_truck_fields());

            self.channel
                .say("Please check if the following information is correct (y/n): ")?;
            for line in truck.card_lines() {
                self.channel.say(&line)?;
            }
            if proceed!(self.channel.confirm(self.options.strict_confirmation)) {
                debug!(number, brand = %truck.brand, model = %truck.model, "truck confirmed");
                return Ok(Outcome::Completed(truck));
            }
            self.channel.say("No problem, let's try again.")?;
        }
    }

    fn collect_truck_fields(&mut self) -> Result<Outcome<TruckRecord>> {
        let brand = proceed!(self.channel.ask_field(&self.rules.brand));
        let model = proceed!(self.channel.ask_field(&self.rules.model));
        let engine_cc = proceed!(self.channel.ask_field(&self.rules.engine_cc));
        let axle_count = proceed!(self.channel.ask_field(&self.rules.axle_count));
        let weight_tonnes = proceed!(self.channel.ask_tonnes(&self.rules.weight));
        let max_load_tonnes = proceed!(self.channel.ask_tonnes(&self.rules.max_load));
        Ok(Outcome::Completed(TruckRecord {
            brand,
            model,
            engine_cc,
            axle_count,
            weight_tonnes,
            max_load_tonnes,
        }))
    }

    /// Ask for the fleet size, collect every truck, then run the review loop
    pub fn collect_fleet(&mut self) -> Result<Outcome<Fleet>> {
        let size: usize = proceed!(self.channel.ask_field(&self.rules.fleet_size));

        self.channel.blank_line()?;
        self.channel
            .say("We will now collect your fleet information.")?;
        self.channel.pause();

        let mut fleet = Fleet::default();
        for number in 1..=size {
            let truck = proceed!(self.collect_truck(number));
            info!(number, brand = %truck.brand, "truck collected");
            fleet.push(truck);
        }

        self.review_fleet(fleet)
    }

    /// Show the fleet and re-collect flagged trucks until the customer confirms
    pub fn review_fleet(&mut self, mut fleet: Fleet) -> Result<Outcome<Fleet>> {
        loop {
            self.channel.pause();
            self.channel.blank_line()?;
            self.channel.say(
                "Fleet information collected. \
                 Please take a look at the table and tell us if everything is correct (y/n).",
            )?;
            self.channel.blank_line()?;
            self.channel.say(&fleet.render_table())?;
            self.channel.blank_line()?;

            if proceed!(self.channel.confirm(self.options.strict_confirmation)) {
                info!(trucks = fleet.len(), "fleet confirmed");
                return Ok(Outcome::Completed(fleet));
            }

            if fleet.is_empty() {
                self.channel.say("There are no trucks to correct.")?;
                continue;
            }

            let size = fleet.len();
            let rule = &self.rules.truck_number;
            let number = proceed!(self.channel.ask_until(rule.prompt, |answer| {
                if !rule.accepts(answer) {
                    return Err(rule.error_prompt.to_string());
                }
                match answer.parse::<usize>() {
                    Ok(n) if fleet.contains_number(n) => Ok(n),
                    _ => Err(format!(
                        "Please choose a truck number between 1 and {}: ",
                        size
                    )),
                }
            }));

            let truck = proceed!(self.collect_truck(number));
            fleet.replace(number, truck)?;
            info!(number, "truck corrected");
        }
    }

    pub fn farewell(&mut self) -> Result<()> {
        self.channel.say("Thank you, and have a nice day!")
    }
}
