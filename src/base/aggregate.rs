/// Running per-key totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate<K, V> {
    m: std::collections::BTreeMap<K, V>,
}

impl<K, V> Default for Aggregate<K, V> {
    fn default() -> Self {
        Self {
            m: Default::default(),
        }
    }
}

impl<K, V> Aggregate<K, V> {
    pub fn add(&mut self, key: K, value: V)
    where
        K: Ord,
        V: Copy + Default + std::ops::AddAssign,
    {
        *(self.m.entry(key).or_default()) += value;
    }

    pub fn get(&self, key: K) -> Option<V>
    where
        K: Ord,
        V: Copy,
    {
        self.m.get(&key).copied()
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Ord,
    V: Copy + Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}
