//! Module registry: read-only lookup table from `ModuleId` to `PromptModule`.
//!
//! Built once at startup (`ModuleRegistry::builtin()`), validated, and shared through
//! `AppState`. Nothing mutates it after construction.

use std::collections::HashMap;

use thiserror::Error;

use crate::assembler::DROP_ORDER;
use crate::modules::prompts;
use crate::modules::{ModuleId, ModulePriority, ModuleType, PromptModule};

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("Module '{0}' is not registered")]
    Missing(ModuleId),

    #[error("Module '{id}' must be typed posture, found {found:?}")]
    PostureType { id: ModuleId, found: ModuleType },

    #[error("Required module '{0}' must have priority 1")]
    RequiredNotKept(ModuleId),

    #[error("Drop-order module '{0}' has priority 1 and would never be evicted")]
    DroppableKept(ModuleId),

    #[error("Tool module '{0}' must have priority 1")]
    ToolNotKept(ModuleId),
}

#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    modules: HashMap<ModuleId, PromptModule>,
}

impl ModuleRegistry {
    /// Registry of the built-in modules.
    pub fn builtin() -> Self {
        Self::from_modules(builtin_modules())
    }

    /// Builds a registry from an explicit module list. Later duplicates win.
    pub fn from_modules(modules: impl IntoIterator<Item = PromptModule>) -> Self {
        Self {
            modules: modules.into_iter().map(|m| (m.id, m)).collect(),
        }
    }

    pub fn get(&self, id: ModuleId) -> Option<&PromptModule> {
        self.modules.get(&id)
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.modules.contains_key(&id)
    }

    /// Resolves ids in order, skipping ids with no registered module and repeats.
    pub fn resolve(&self, ids: &[ModuleId]) -> Vec<&PromptModule> {
        let mut seen = Vec::with_capacity(ids.len());
        ids.iter()
            .filter(|id| {
                if seen.contains(*id) {
                    return false;
                }
                seen.push(**id);
                true
            })
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// All registered modules in `ModuleId` declaration order.
    pub fn modules(&self) -> Vec<&PromptModule> {
        let mut all: Vec<_> = self.modules.values().collect();
        all.sort_by_key(|m| m.id);
        all
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Startup check that selection and eviction rules line up with the table.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for id in ModuleId::ALL {
            if !self.contains(id) {
                return Err(RegistryError::Missing(id));
            }
        }

        for posture in crate::router::types::Posture::ALL {
            let id = posture.module_id();
            let module = self.get(id).ok_or(RegistryError::Missing(id))?;
            if module.module_type != ModuleType::Posture {
                return Err(RegistryError::PostureType {
                    id,
                    found: module.module_type,
                });
            }
        }

        for id in ModuleId::REQUIRED {
            let module = self.get(id).ok_or(RegistryError::Missing(id))?;
            if module.priority != ModulePriority::Keep {
                return Err(RegistryError::RequiredNotKept(id));
            }
        }

        for module in self.modules.values() {
            if module.module_type == ModuleType::Tool && module.priority != ModulePriority::Keep {
                return Err(RegistryError::ToolNotKept(module.id));
            }
        }

        for id in DROP_ORDER {
            if let Some(module) = self.get(id) {
                if module.priority == ModulePriority::Keep {
                    return Err(RegistryError::DroppableKept(id));
                }
            }
        }

        Ok(())
    }
}

fn builtin_modules() -> Vec<PromptModule> {
    use ModuleId as Id;
    use ModulePriority::{Expendable, Keep, Prefer};
    use ModuleType as T;

    vec![
        PromptModule::new(Id::CoreIdentity, T::Core, Keep, "What the coach is and isn't", prompts::CORE_IDENTITY),
        PromptModule::new(Id::Boundaries, T::Core, Keep, "Scope limits and safety rules", prompts::BOUNDARIES),
        PromptModule::new(Id::VoiceBaseline, T::Voice, Keep, "Default writing style", prompts::VOICE_BASELINE),
        PromptModule::new(Id::BrandAuthority, T::Core, Keep, "Source of the coaching methodology", prompts::BRAND_AUTHORITY),
        PromptModule::new(Id::MemoryBehavior, T::Memory, Keep, "How to use saved career context", prompts::MEMORY_BEHAVIOR),
        PromptModule::new(Id::MemoryProposal, T::Memory, Keep, "Rules for proposing new memories", prompts::MEMORY_PROPOSAL),
        PromptModule::new(Id::PostureCalmExpert, T::Posture, Keep, "Default steady expert mode", prompts::POSTURE_CALM_EXPERT),
        PromptModule::new(Id::PostureCoach, T::Posture, Keep, "Teaching mode", prompts::POSTURE_COACH),
        PromptModule::new(Id::PostureStrategist, T::Posture, Keep, "Decision and narrowing mode", prompts::POSTURE_STRATEGIST),
        PromptModule::new(Id::PostureOperator, T::Posture, Keep, "Execution mode", prompts::POSTURE_OPERATOR),
        PromptModule::new(Id::PostureCompanion, T::Posture, Keep, "Stabilizing mode for distress", prompts::POSTURE_COMPANION),
        PromptModule::new(Id::TempoFast, T::Policy, Prefer, "Pacing for high urgency", prompts::TEMPO_FAST),
        PromptModule::new(Id::TempoNormal, T::Policy, Expendable, "Pacing for medium urgency", prompts::TEMPO_NORMAL),
        PromptModule::new(Id::TempoSlow, T::Policy, Expendable, "Pacing for no urgency", prompts::TEMPO_SLOW),
        PromptModule::new(Id::FrictionHigh, T::Policy, Prefer, "Force clarity before helping", prompts::FRICTION_HIGH),
        PromptModule::new(Id::FrictionMedium, T::Policy, Prefer, "Light pushback", prompts::FRICTION_MEDIUM),
        PromptModule::new(Id::DecisionPhilosophy, T::Decision, Prefer, "How to guide a decision", prompts::DECISION_PHILOSOPHY),
        PromptModule::new(Id::PovCore, T::Pov, Expendable, "Beliefs behind the advice", prompts::POV_CORE),
        PromptModule::new(Id::ToolResumes, T::Tool, Keep, "Resume expertise", prompts::TOOL_RESUMES),
        PromptModule::new(Id::ToolInterviewPrep, T::Tool, Keep, "Interview expertise", prompts::TOOL_INTERVIEW_PREP),
        PromptModule::new(Id::ToolLinkedin, T::Tool, Keep, "LinkedIn expertise", prompts::TOOL_LINKEDIN),
        PromptModule::new(Id::ToolNegotiations, T::Tool, Keep, "Offer negotiation expertise", prompts::TOOL_NEGOTIATIONS),
        PromptModule::new(Id::ToolNetworking, T::Tool, Keep, "Networking expertise", prompts::TOOL_NETWORKING),
        PromptModule::new(Id::ToolConfidence, T::Tool, Keep, "Confidence-building expertise", prompts::TOOL_CONFIDENCE),
        PromptModule::new(Id::ToolJobseekerOps, T::Tool, Keep, "Job search operations", prompts::TOOL_JOBSEEKER_OPS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::types::Domain;

    #[test]
    fn test_builtin_registry_validates() {
        let registry = ModuleRegistry::builtin();
        assert_eq!(registry.validate(), Ok(()));
        assert_eq!(registry.len(), ModuleId::ALL.len());
    }

    #[test]
    fn test_missing_required_module_fails_validation() {
        let modules = builtin_modules()
            .into_iter()
            .filter(|m| m.id != ModuleId::BrandAuthority);
        let registry = ModuleRegistry::from_modules(modules);
        assert_eq!(
            registry.validate(),
            Err(RegistryError::Missing(ModuleId::BrandAuthority))
        );
    }

    #[test]
    fn test_mistyped_posture_fails_validation() {
        let modules = builtin_modules().into_iter().map(|mut m| {
            if m.id == ModuleId::PostureCoach {
                m.module_type = ModuleType::Policy;
            }
            m
        });
        let registry = ModuleRegistry::from_modules(modules);
        assert!(matches!(
            registry.validate(),
            Err(RegistryError::PostureType { id: ModuleId::PostureCoach, .. })
        ));
    }

    #[test]
    fn test_drop_order_module_marked_keep_fails_validation() {
        let modules = builtin_modules().into_iter().map(|mut m| {
            if m.id == ModuleId::PovCore {
                m.priority = ModulePriority::Keep;
            }
            m
        });
        let registry = ModuleRegistry::from_modules(modules);
        assert_eq!(
            registry.validate(),
            Err(RegistryError::DroppableKept(ModuleId::PovCore))
        );
    }

    #[test]
    fn test_tool_modules_are_never_dropped() {
        let registry = ModuleRegistry::builtin();
        for module in registry.modules() {
            if module.module_type == ModuleType::Tool {
                assert_eq!(module.priority, ModulePriority::Keep, "{} must be kept", module.id);
            }
        }
        assert_eq!(
            registry.get(ModuleId::FrictionMedium).map(|m| m.priority),
            Some(ModulePriority::Prefer)
        );
    }

    #[test]
    fn test_tool_module_below_keep_fails_validation() {
        let modules = builtin_modules().into_iter().map(|mut m| {
            if m.id == ModuleId::ToolNetworking {
                m.priority = ModulePriority::Prefer;
            }
            m
        });
        let registry = ModuleRegistry::from_modules(modules);
        assert_eq!(
            registry.validate(),
            Err(RegistryError::ToolNotKept(ModuleId::ToolNetworking))
        );
    }

    #[test]
    fn test_resolve_skips_unregistered_and_repeated_ids() {
        let registry = ModuleRegistry::from_modules(
            builtin_modules()
                .into_iter()
                .filter(|m| m.id != ModuleId::TempoSlow),
        );
        let resolved = registry.resolve(&[
            ModuleId::CoreIdentity,
            ModuleId::TempoSlow,
            ModuleId::CoreIdentity,
            ModuleId::PovCore,
        ]);
        let ids: Vec<_> = resolved.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![ModuleId::CoreIdentity, ModuleId::PovCore]);
    }

    #[test]
    fn test_only_posture_modules_are_typed_posture() {
        let registry = ModuleRegistry::builtin();
        for module in registry.modules() {
            assert_eq!(
                module.module_type == ModuleType::Posture,
                module.id.as_str().starts_with("posture_"),
                "{} type mismatch",
                module.id
            );
        }
    }

    #[test]
    fn test_tool_modules_agree_with_domain_mapping() {
        for domain in Domain::DETECTION_ORDER {
            let tool = domain.tool_module().unwrap();
            assert_eq!(tool.covered_domain(), Some(domain));
            let module = ModuleRegistry::builtin().get(tool).cloned().unwrap();
            assert_eq!(module.module_type, ModuleType::Tool);
        }
    }

    #[test]
    fn test_every_module_has_content() {
        for module in ModuleRegistry::builtin().modules() {
            assert!(!module.content.trim().is_empty(), "{} is empty", module.id);
        }
    }
}
