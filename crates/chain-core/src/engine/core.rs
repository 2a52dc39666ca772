//! Cadena compilada y su loop de ejecución.

use std::sync::Arc;

use serde_json::Value;

use crate::errors::CoreChainError;
use crate::event::{ChainEventKind, EventSink};
use crate::model::{ChainValue, InvocationContext};
use crate::redirect::StepRedirects;
use crate::step::{RunnableStep, StepFlow};

/// Un step resuelto en compilación: wrapper normalizado más su tabla de
/// redirección con slots ya resueltos.
pub(crate) struct CompiledStep {
    pub id: String,
    pub slot: usize,
    pub runnable: Arc<dyn RunnableStep>,
    pub redirects: StepRedirects,
    pub capture_result: bool,
}

/// Cadena compilada: estructura inmutable sin dependencia del builder.
///
/// El control fluye por un loop explícito (no closures anidadas): cada step
/// corre en orden de registro y entrega, vía `StepFlow`, los argumentos del
/// siguiente. Puede invocarse cualquier cantidad de veces; todo el estado
/// mutable por invocación vive en un `InvocationContext` propio, así que las
/// invocaciones no comparten nada entre sí.
///
/// Limitación aceptada: un step cuyo future nunca se resuelve deja la
/// invocación suspendida indefinidamente; el core no provee cancelación ni
/// timeouts.
pub struct Chain {
    definition_hash: String,
    steps: Vec<CompiledStep>,
    slot_count: usize,
    sink: Option<Arc<dyn EventSink>>,
}

impl Chain {
    pub(crate) fn new(definition_hash: String,
                      steps: Vec<CompiledStep>,
                      slot_count: usize,
                      sink: Option<Arc<dyn EventSink>>)
                      -> Self {
        Self { definition_hash,
               steps,
               slot_count,
               sink }
    }

    /// Hash de la definición (versión del engine + ids en orden de registro).
    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }

    /// Cantidad de posiciones de la cadena (un wrapper puede ocupar varias).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Ejecuta la cadena completa con los argumentos dados.
    ///
    /// Orden de fases por step: resolver argumentos pendientes (take),
    /// entregar `args_to`, ejecutar, entregar `result_to` y captura
    /// `as_result`, avanzar. Errores de step abortan el resto y se propagan
    /// sin envoltura adicional.
    pub async fn invoke(&self, args: Vec<Value>) -> Result<ChainValue, CoreChainError> {
        let mut ctx = InvocationContext::new(self.slot_count);
        self.record(&ctx,
                    ChainEventKind::InvocationStarted { definition_hash: self.definition_hash.clone(),
                                                        step_count: self.steps.len() });

        let mut current = args;
        for (index, step) in self.steps.iter().enumerate() {
            self.record(&ctx,
                        ChainEventKind::StepStarted { step_index: index,
                                                      step_id: step.id.clone() });

            let call_args = ctx.take_pending(step.slot, current);
            for &target in &step.redirects.args_to {
                ctx.stage_args(target, call_args.clone());
            }

            match step.runnable.call(call_args).await {
                Ok(StepFlow::Continue(next_args)) => {
                    for &target in &step.redirects.result_to {
                        ctx.append_result(target, next_args.clone());
                    }
                    if step.capture_result {
                        ctx.capture(next_args.clone());
                        self.record(&ctx,
                                    ChainEventKind::ResultCaptured { step_index: index,
                                                                     step_id: step.id.clone() });
                    }
                    self.record(&ctx,
                                ChainEventKind::StepFinished { step_index: index,
                                                               step_id: step.id.clone(),
                                                               forwarded_args: step.redirects.args_to.len(),
                                                               forwarded_results: step.redirects.result_to.len() });
                    current = next_args;
                }
                Ok(StepFlow::Halt) => {
                    self.record(&ctx,
                                ChainEventKind::StepHalted { step_index: index,
                                                             step_id: step.id.clone() });
                    // Corte silencioso: si un step anterior ya capturó el
                    // resultado externo, ese valor se conserva.
                    let result = match ctx.take_captured() {
                        Some(captured) => ChainValue::from_args(captured),
                        None => ChainValue::Absent,
                    };
                    self.record(&ctx,
                                ChainEventKind::InvocationFinished { result_arity: result.arity() });
                    return Ok(result);
                }
                Err(error) => {
                    self.record(&ctx,
                                ChainEventKind::StepFailed { step_index: index,
                                                             step_id: step.id.clone(),
                                                             error: error.clone() });
                    return Err(error);
                }
            }
        }

        // Centinela: el resultado capturado por `as_result` pisa lo que
        // llegó al final de la cadena.
        let result = match ctx.take_captured() {
            Some(captured) => ChainValue::from_args(captured),
            None => ChainValue::from_args(current),
        };
        self.record(&ctx,
                    ChainEventKind::InvocationFinished { result_arity: result.arity() });
        Ok(result)
    }

    fn record(&self, ctx: &InvocationContext, kind: ChainEventKind) {
        if let Some(sink) = &self.sink {
            sink.append_kind(ctx.invocation_id, kind);
        }
    }
}
