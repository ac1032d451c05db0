use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::Result;

use crate::models::{EvaluatedProfile, Routine};

/// Data that flows through the pipeline.
/// Each PipelineData represents a single candidate routine with associated metadata.
#[derive(Debug, Clone)]
pub struct PipelineData {
    /// The candidate routine
    pub routine: Routine,

    /// Metadata for tracking properties (e.g., "score", "safety_reason")
    pub metadata: HashMap<String, MetadataValue>,
}

/// Metadata value types
#[derive(Debug, Clone)]
pub enum MetadataValue {
    Bool(bool),
    Float(f64),
    String(String),
    Int(i64),
}

impl PipelineData {
    /// Create PipelineData for a catalog routine
    pub fn from_routine(routine: Routine) -> Self {
        Self {
            routine,
            metadata: HashMap::new(),
        }
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: MetadataValue) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Get metadata as bool
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.metadata.get(key) {
            Some(MetadataValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// Get metadata as float
    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.metadata.get(key) {
            Some(MetadataValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// Get metadata as string
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.metadata.get(key) {
            Some(MetadataValue::String(v)) => Some(v.as_str()),
            _ => None,
        }
    }
}

/// Context available to all pipeline steps
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// Evaluated user profile the candidates are matched against
    pub profile: EvaluatedProfile,
    pub verbose: bool,
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Process data and return transformed data
    /// Steps can filter (many → fewer) or annotate/transform (many → many)
    fn process(&self, data: Vec<PipelineData>, context: &PipelineContext)
    -> Result<Vec<PipelineData>>;

    /// Human-readable name for this step (used in verbose output)
    fn name(&self) -> &str;
}

/// Work item for pipeline execution
/// Contains data and the remaining steps to execute
#[derive(Clone)]
pub struct WorkItem {
    /// The data to process
    pub data: PipelineData,

    /// Remaining pipeline steps (steps not yet executed)
    pub remaining_steps: Vec<Arc<dyn PipelineStep>>,

    /// Step index (for tracking progress)
    pub current_step_index: usize,
}

impl WorkItem {
    /// Create a new work item
    pub fn new(data: PipelineData, steps: Vec<Arc<dyn PipelineStep>>) -> Self {
        Self {
            data,
            remaining_steps: steps,
            current_step_index: 0,
        }
    }

    /// Check if this work item is complete (no more steps)
    pub fn is_complete(&self) -> bool {
        self.remaining_steps.is_empty()
    }

    /// Run the next step and create new work items for the remaining steps.
    /// A filtering step may return no items, which retires this work item.
    pub fn process_next_step(&mut self, context: &PipelineContext) -> Result<Vec<WorkItem>> {
        if self.remaining_steps.is_empty() {
            return Ok(vec![]);
        }

        // Take the first step
        let step = self.remaining_steps[0].clone();
        let remaining_after = self.remaining_steps[1..].to_vec();

        let results = step.process(vec![self.data.clone()], context)?;

        let mut new_items = Vec::new();
        for result_data in results {
            new_items.push(WorkItem {
                data: result_data,
                remaining_steps: remaining_after.clone(),
                current_step_index: self.current_step_index + 1,
            });
        }

        Ok(new_items)
    }
}

/// Pipeline executor using MPSC channel for work distribution
pub struct PipelineExecutor {
    sender: Sender<WorkItem>,
    receiver: Receiver<WorkItem>,
    context: PipelineContext,
}

impl PipelineExecutor {
    /// Create a new executor
    pub fn new(context: PipelineContext) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            context,
        }
    }

    /// Execute the pipeline by processing work items from the channel
    pub fn execute(&self, initial_items: Vec<WorkItem>) -> Result<Vec<PipelineData>> {
        let mut pending_count = initial_items.len();

        // Send all initial work items
        for item in initial_items {
            self.sender
                .send(item)
                .map_err(|e| anyhow::anyhow!("Failed to send work item: {}", e))?;
        }

        let mut completed_results = Vec::new();

        // Process work items until queue is empty
        while pending_count > 0 {
            match self.receiver.try_recv() {
                Ok(mut item) => {
                    pending_count -= 1;

                    if item.is_complete() {
                        // No more steps - this is a final result
                        completed_results.push(item.data);
                    } else {
                        // Process next step
                        let new_items = item.process_next_step(&self.context)?;

                        // Send new work items back to the queue
                        for new_item in new_items {
                            self.sender
                                .send(new_item)
                                .map_err(|e| anyhow::anyhow!("Failed to send work item: {}", e))?;
                            pending_count += 1;
                        }
                    }
                }
                Err(mpsc::TryRecvError::Empty) => {
                    if pending_count == 0 {
                        break;
                    }
                    // Wait a bit if queue is empty but we expect more items
                    std::thread::yield_now();
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    break;
                }
            }
        }

        Ok(completed_results)
    }
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline matching candidates against `profile`
    pub fn new(profile: EvaluatedProfile) -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext {
                profile,
                verbose: false,
            },
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Helper method to add a step from a Box (for convenience)
    pub fn add_step_boxed(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.steps.push(Arc::from(step));
        self
    }

    /// Run the pipeline sequentially over the candidate routines
    pub fn run(&self, input: Vec<Routine>) -> Result<Vec<PipelineData>> {
        let mut data: Vec<PipelineData> = input.into_iter().map(PipelineData::from_routine).collect();

        for step in &self.steps {
            if self.context.verbose {
                println!(
                    "Running step: {} (processing {} candidates)",
                    step.name(),
                    data.len()
                );
            }

            data = step.process(data, &self.context)?;

            if self.context.verbose {
                println!("  → {} candidates", data.len());
            }
        }

        Ok(data)
    }

    /// Run the pipeline using the executor with work queue
    /// This allows for more sophisticated execution patterns in the future
    pub fn run_with_executor(&self, input: Vec<Routine>) -> Result<Vec<PipelineData>> {
        let initial_items: Vec<WorkItem> = input
            .into_iter()
            .map(|routine| WorkItem::new(PipelineData::from_routine(routine), self.steps.clone()))
            .collect();

        let executor = PipelineExecutor::new(self.context.clone());
        executor.execute(initial_items)
    }

    /// Run the pipeline but stop at an intermediate step (useful for debugging)
    pub fn run_partial(&self, input: Vec<Routine>, num_steps: usize) -> Result<Vec<PipelineData>> {
        let mut data: Vec<PipelineData> = input.into_iter().map(PipelineData::from_routine).collect();

        for (i, step) in self.steps.iter().enumerate() {
            if i >= num_steps {
                break;
            }
            if self.context.verbose {
                println!(
                    "Running step {}: {} (processing {} candidates)",
                    i + 1,
                    step.name(),
                    data.len()
                );
            }
            data = step.process(data, &self.context)?;
            if self.context.verbose {
                println!("  → {} candidates", data.len());
            }
        }

        Ok(data)
    }
}
