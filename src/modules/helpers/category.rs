use std::collections::HashMap;

use crate::{CategoryGroup, JoinedRecord};

pub struct CategoryHelper {}

impl CategoryHelper {
    /// # group records by category
    /// groups appear in the order their category is first seen, records keep their input order.
    /// the category is used as is, so `Junior` and `junior ` end up in different groups
    ///
    /// ## Arguments
    /// * `records` - the joined records in roster order
    ///
    /// ## Returns
    /// * `Vec<CategoryGroup>` - one group per distinct category
    pub fn group_by_category(records: Vec<JoinedRecord>) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            match index.get(&record.category).copied() {
                Some(i) => groups[i].records.push(record),
                None => {
                    index.insert(record.category.clone(), groups.len());
                    groups.push(CategoryGroup {
                        category: record.category.clone(),
                        records: vec![record],
                    });
                }
            }
        }

        groups
    }
}
