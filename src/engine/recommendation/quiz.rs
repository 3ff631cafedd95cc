// ==========================================
// 推荐问卷状态机
// ==========================================
// 状态 = 当前步骤 + 已填答案
// 步骤: 部位 → 项目类型 → 气候区 → 预算 → 安装方式 → 完成
// 规则: 不可跳步;回退只清空被回退步骤自己的答案
// ==========================================

use crate::domain::quiz::{BudgetPriority, ProjectType, QuizAnswers, QuizLocation};
use crate::domain::types::{InstallMethod, ZoneNumber};
use crate::engine::zone_resolver::ZoneResolver;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStep {
    Location,
    ProjectType,
    ClimateZone,
    Budget,
    Installation,
    Complete,
}

impl QuizStep {
    pub const QUESTIONS: [QuizStep; 5] = [
        QuizStep::Location,
        QuizStep::ProjectType,
        QuizStep::ClimateZone,
        QuizStep::Budget,
        QuizStep::Installation,
    ];

    /// 问题序号(从 0 开始);完成态返回 5
    pub fn index(&self) -> usize {
        match self {
            QuizStep::Location => 0,
            QuizStep::ProjectType => 1,
            QuizStep::ClimateZone => 2,
            QuizStep::Budget => 3,
            QuizStep::Installation => 4,
            QuizStep::Complete => 5,
        }
    }

    pub fn next(&self) -> QuizStep {
        match self {
            QuizStep::Location => QuizStep::ProjectType,
            QuizStep::ProjectType => QuizStep::ClimateZone,
            QuizStep::ClimateZone => QuizStep::Budget,
            QuizStep::Budget => QuizStep::Installation,
            QuizStep::Installation | QuizStep::Complete => QuizStep::Complete,
        }
    }

    pub fn previous(&self) -> Option<QuizStep> {
        match self {
            QuizStep::Location => None,
            QuizStep::ProjectType => Some(QuizStep::Location),
            QuizStep::ClimateZone => Some(QuizStep::ProjectType),
            QuizStep::Budget => Some(QuizStep::ClimateZone),
            QuizStep::Installation => Some(QuizStep::Budget),
            QuizStep::Complete => Some(QuizStep::Installation),
        }
    }
}

impl fmt::Display for QuizStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizStep::Location => "location",
            QuizStep::ProjectType => "project_type",
            QuizStep::ClimateZone => "climate_zone",
            QuizStep::Budget => "budget",
            QuizStep::Installation => "installation",
            QuizStep::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// 单步答案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAnswer {
    Location(QuizLocation),
    ProjectType(ProjectType),
    ClimateZone(ZoneNumber),
    Budget(BudgetPriority),
    Installation(InstallMethod),
}

impl QuizAnswer {
    /// 该答案所属步骤
    pub fn step(&self) -> QuizStep {
        match self {
            QuizAnswer::Location(_) => QuizStep::Location,
            QuizAnswer::ProjectType(_) => QuizStep::ProjectType,
            QuizAnswer::ClimateZone(_) => QuizStep::ClimateZone,
            QuizAnswer::Budget(_) => QuizStep::Budget,
            QuizAnswer::Installation(_) => QuizStep::Installation,
        }
    }
}

/// 问卷状态机错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("答案与当前步骤不符: 当前={expected}, 答案={got}")]
    UnexpectedAnswer { expected: QuizStep, got: QuizStep },

    #[error("问卷已完成,请回退或重置")]
    AlreadyComplete,

    #[error("已在第一步,无法回退")]
    NoPreviousStep,

    #[error("问卷未完成: 当前步骤={0}")]
    Incomplete(QuizStep),

    #[error("ZIP 未能解析到气候区: {zip}")]
    ZoneNotFound { zip: String },
}

// ==========================================
// QuizSession - 问卷会话
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuizSession {
    location: Option<QuizLocation>,
    project_type: Option<ProjectType>,
    zone: Option<ZoneNumber>,
    budget: Option<BudgetPriority>,
    install: Option<InstallMethod>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前步骤 = 第一个未作答的问题
    pub fn step(&self) -> QuizStep {
        if self.location.is_none() {
            QuizStep::Location
        } else if self.project_type.is_none() {
            QuizStep::ProjectType
        } else if self.zone.is_none() {
            QuizStep::ClimateZone
        } else if self.budget.is_none() {
            QuizStep::Budget
        } else if self.install.is_none() {
            QuizStep::Installation
        } else {
            QuizStep::Complete
        }
    }

    pub fn is_complete(&self) -> bool {
        self.step() == QuizStep::Complete
    }

    /// 作答当前步骤并前进
    pub fn answer(&mut self, answer: QuizAnswer) -> Result<QuizStep, QuizError> {
        let current = self.step();
        if current == QuizStep::Complete {
            return Err(QuizError::AlreadyComplete);
        }
        if answer.step() != current {
            return Err(QuizError::UnexpectedAnswer {
                expected: current,
                got: answer.step(),
            });
        }

        match answer {
            QuizAnswer::Location(v) => self.location = Some(v),
            QuizAnswer::ProjectType(v) => self.project_type = Some(v),
            QuizAnswer::ClimateZone(v) => self.zone = Some(v),
            QuizAnswer::Budget(v) => self.budget = Some(v),
            QuizAnswer::Installation(v) => self.install = Some(v),
        }

        tracing::debug!(step = %current, "问卷作答");
        Ok(self.step())
    }

    /// 气候区步骤以 ZIP 作答;解析失败时停留在该步骤
    pub fn answer_zip(
        &mut self,
        resolver: &ZoneResolver<'_>,
        zip: &str,
    ) -> Result<QuizStep, QuizError> {
        let current = self.step();
        if current != QuizStep::ClimateZone {
            return Err(if current == QuizStep::Complete {
                QuizError::AlreadyComplete
            } else {
                QuizError::UnexpectedAnswer {
                    expected: current,
                    got: QuizStep::ClimateZone,
                }
            });
        }

        let zone = resolver
            .zone_number_by_zip(zip)
            .ok_or_else(|| QuizError::ZoneNotFound {
                zip: zip.to_string(),
            })?;
        self.answer(QuizAnswer::ClimateZone(zone))
    }

    /// 回到上一步,并清空该步答案
    pub fn go_back(&mut self) -> Result<QuizStep, QuizError> {
        let previous = self.step().previous().ok_or(QuizError::NoPreviousStep)?;
        match previous {
            QuizStep::Location => self.location = None,
            QuizStep::ProjectType => self.project_type = None,
            QuizStep::ClimateZone => self.zone = None,
            QuizStep::Budget => self.budget = None,
            QuizStep::Installation => self.install = None,
            QuizStep::Complete => {}
        }
        Ok(previous)
    }

    /// 回到第一步,清空全部答案
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 完整答案;未答完返回 Incomplete
    pub fn answers(&self) -> Result<QuizAnswers, QuizError> {
        match (
            self.location,
            self.project_type,
            self.zone,
            self.budget,
            self.install,
        ) {
            (Some(location), Some(project_type), Some(zone), Some(budget), Some(install)) => {
                Ok(QuizAnswers {
                    location,
                    project_type,
                    zone,
                    budget,
                    install,
                })
            }
            _ => Err(QuizError::Incomplete(self.step())),
        }
    }

    /// 已作答的步骤数
    pub fn answered_count(&self) -> usize {
        self.step().index()
    }
}
