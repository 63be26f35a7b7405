use serde::{Deserialize, Serialize};

/// Field holding a loop block's iteration count.
pub const FIELD_NUM: &str = "NUM";
/// Field holding a turn block's direction.
pub const FIELD_DIR: &str = "DIR";
/// Field holding a procedure call's target name.
pub const FIELD_NAME: &str = "NAME";
/// Body slot of start and loop blocks.
pub const SLOT_DO: &str = "DO";

/// Primitive action token, the vocabulary of the flat program form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    MoveForward,
    TurnLeft,
    TurnRight,
    Collect,
    Jump,
    ToggleSwitch,
}

impl Action {
    /// Wire token as the game client spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveForward => "moveForward",
            Action::TurnLeft => "turnLeft",
            Action::TurnRight => "turnRight",
            Action::Collect => "collect",
            Action::Jump => "jump",
            Action::ToggleSwitch => "toggleSwitch",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "moveForward" => Some(Action::MoveForward),
            "turnLeft" => Some(Action::TurnLeft),
            "turnRight" => Some(Action::TurnRight),
            "collect" => Some(Action::Collect),
            "jump" => Some(Action::Jump),
            "toggleSwitch" => Some(Action::ToggleSwitch),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    #[serde(rename = "turnLeft")]
    Left,
    #[serde(rename = "turnRight")]
    Right,
}

impl TurnDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnDirection::Left => "turnLeft",
            TurnDirection::Right => "turnRight",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "turnLeft" => Some(TurnDirection::Left),
            "turnRight" => Some(TurnDirection::Right),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            TurnDirection::Left => TurnDirection::Right,
            TurnDirection::Right => TurnDirection::Left,
        }
    }
}

/// Block tag identifying a node's semantic role in the program tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    #[serde(rename = "maze_start")]
    Start,
    #[serde(rename = "maze_repeat")]
    Repeat,
    #[serde(rename = "maze_turn")]
    Turn,
    #[serde(rename = "maze_moveForward")]
    Move,
    #[serde(rename = "maze_collect")]
    Collect,
    #[serde(rename = "maze_jump")]
    Jump,
    #[serde(rename = "maze_toggle_switch")]
    ToggleSwitch,
    #[serde(rename = "procedures_defnoreturn")]
    ProcedureDef,
    #[serde(rename = "procedures_callnoreturn")]
    ProcedureCall,
    #[serde(rename = "variables_set")]
    VariableSet,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Start => "maze_start",
            BlockKind::Repeat => "maze_repeat",
            BlockKind::Turn => "maze_turn",
            BlockKind::Move => "maze_moveForward",
            BlockKind::Collect => "maze_collect",
            BlockKind::Jump => "maze_jump",
            BlockKind::ToggleSwitch => "maze_toggle_switch",
            BlockKind::ProcedureDef => "procedures_defnoreturn",
            BlockKind::ProcedureCall => "procedures_callnoreturn",
            BlockKind::VariableSet => "variables_set",
        }
    }

    /// Kinds that other parts of the program may reference; deleting one
    /// breaks the blocks that depend on it.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            BlockKind::Repeat | BlockKind::ProcedureCall | BlockKind::VariableSet
        )
    }
}
