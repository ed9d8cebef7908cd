// ==========================================
// 成衣产线跟踪系统 - 单键记忆化缓存
// ==========================================
// 语义: 缓存最近一次输入对应的结果；键变化即重算
// ==========================================

/// 单槽记忆化缓存
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    hits: u64,
    misses: u64,
}

impl<K: PartialEq + Clone, V: Clone> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            slot: None,
            hits: 0,
            misses: 0,
        }
    }

    /// 按键取值；键与上次不同时调用 `compute` 重算
    pub fn get_or_compute<F>(&mut self, key: &K, compute: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        if let Some((cached_key, cached_value)) = &self.slot {
            if cached_key == key {
                self.hits += 1;
                return cached_value.clone();
            }
        }

        self.misses += 1;
        let value = compute(key);
        self.slot = Some((key.clone(), value.clone()));
        value
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl<K: PartialEq + Clone, V: Clone> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
