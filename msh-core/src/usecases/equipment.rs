use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub name: String,
    pub description: Option<String>,
}

fn prepare(new_equipment: NewEquipment) -> Result<NewEquipment> {
    let NewEquipment { name, description } = new_equipment;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let description = description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    Ok(NewEquipment { name, description })
}

fn ensure_unique_name<R: EquipmentRepo>(repo: &R, name: &str, except_id: Option<&Id>) -> Result<()> {
    let name = name.to_lowercase();
    let exists = repo
        .all_equipment()?
        .into_iter()
        .any(|e| Some(&e.id) != except_id && e.name.to_lowercase() == name);
    if exists {
        return Err(Error::EquipmentExists);
    }
    Ok(())
}

pub fn create_equipment<R: EquipmentRepo>(repo: &R, new_equipment: NewEquipment) -> Result<Equipment> {
    let NewEquipment { name, description } = prepare(new_equipment)?;
    ensure_unique_name(repo, &name, None)?;
    let now = Timestamp::now();
    let equipment = Equipment {
        id: Id::new(),
        name,
        description,
        created_at: now,
        updated_at: now,
    };
    log::debug!("Creating equipment {}", equipment.name);
    repo.create_equipment(&equipment)?;
    Ok(equipment)
}

pub fn update_equipment<R: EquipmentRepo>(
    repo: &R,
    id: &str,
    update: NewEquipment,
) -> Result<Equipment> {
    let NewEquipment { name, description } = prepare(update)?;
    let mut equipment = repo.get_equipment(id)?;
    ensure_unique_name(repo, &name, Some(&equipment.id))?;
    equipment.name = name;
    equipment.description = description;
    equipment.updated_at = Timestamp::now();
    repo.update_equipment(&equipment)?;
    Ok(equipment)
}

pub fn delete_equipment<R: EquipmentRepo>(repo: &R, id: &str) -> Result<()> {
    log::debug!("Deleting equipment {id}");
    Ok(repo.delete_equipment(id)?)
}
