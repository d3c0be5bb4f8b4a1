use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Food {
    Fruits,
    Veggie,
    Dairy,
}

impl Food {
    pub const ALL: [Food; 3] = [Food::Fruits, Food::Veggie, Food::Dairy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Food::Fruits => "fruits",
            Food::Veggie => "veggie",
            Food::Dairy => "dairy",
        }
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Food {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Food::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<_> = Food::ALL.iter().map(|f| format!("'{}'", f)).collect();
                format!("value is not a valid enumeration member; permitted: {}", allowed.join(", "))
            })
    }
}

#[derive(Serialize, Debug)]
pub struct FoodRes {
    pub food_name: Food,
}
