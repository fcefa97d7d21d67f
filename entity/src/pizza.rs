use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::restaurant_pizza::Entity")]
    RestaurantPizza,
}

impl Related<super::restaurant_pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestaurantPizza.def()
    }
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        super::restaurant_pizza::Relation::Restaurant.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::restaurant_pizza::Relation::Pizza.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
