//! 性格カタログと選択（最大 3 件）

/// 選択できる性格の上限
pub const MAX_TRAITS: usize = 3;

/// カタログの 1 項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitDef {
    pub id: &'static str,
    pub label: &'static str,
}

/// 選択肢（表示順）
pub static TRAIT_CATALOG: [TraitDef; 14] = [
    TraitDef { id: "creative", label: "Creative" },
    TraitDef { id: "analytical", label: "Analytical" },
    TraitDef { id: "passionate", label: "Passionate" },
    TraitDef { id: "energetic", label: "Energetic" },
    TraitDef { id: "calm", label: "Calm" },
    TraitDef { id: "artistic", label: "Artistic" },
    TraitDef { id: "intellectual", label: "Intellectual" },
    TraitDef { id: "optimistic", label: "Optimistic" },
    TraitDef { id: "adventurous", label: "Adventurous" },
    TraitDef { id: "resilient", label: "Resilient" },
    TraitDef { id: "visionary", label: "Visionary" },
    TraitDef { id: "mysterious", label: "Mysterious" },
    TraitDef { id: "charismatic", label: "Charismatic" },
    TraitDef { id: "ambitious", label: "Ambitious" },
];

pub fn find_trait(id: &str) -> Option<&'static TraitDef> {
    TRAIT_CATALOG.iter().find(|t| t.id == id)
}

/// toggle の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// 上限に達していたので何もしなかった
    Ignored,
}

/// 選択順を保つ性格の集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitSelection {
    ids: Vec<&'static str>,
}

impl TraitSelection {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択済みなら外し、未選択なら上限未満のときだけ加える。
    /// 上限時は古いものを押し出さない。
    pub fn toggle(&mut self, def: &'static TraitDef) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|id| *id == def.id) {
            self.ids.remove(pos);
            ToggleOutcome::Deselected
        } else if self.ids.len() < MAX_TRAITS {
            self.ids.push(def.id);
            ToggleOutcome::Selected
        } else {
            ToggleOutcome::Ignored
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| *s == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[cfg(test)]
    pub fn ids(&self) -> &[&'static str] {
        &self.ids
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().map(|s| s.to_string()).collect()
    }
}
