//! Embedded name pools for the roster generator.

pub const FIRST_NAMES: &[&str] = &[
  "Aaron", "Abigail", "Adrian", "Alice", "Amelia", "Andre", "Angela", "Ava",
  "Benjamin", "Brenda", "Caleb", "Camila", "Carlos", "Charlotte", "Daniel",
  "Diana", "Elena", "Elijah", "Emily", "Ethan", "Felix", "Gabriel", "Grace",
  "Hannah", "Isaac", "Isabel", "Jacob", "Jasmine", "Javier", "Julia", "Kevin",
  "Laura", "Leo", "Lucia", "Marcus", "Maria", "Mateo", "Mia", "Nathan",
  "Nora", "Oliver", "Olivia", "Pablo", "Rachel", "Samuel", "Sofia", "Thomas",
  "Valeria", "William", "Zoe",
];

pub const LAST_NAMES: &[&str] = &[
  "Adams", "Alvarez", "Baker", "Brown", "Castillo", "Chen", "Clark", "Cruz",
  "Davis", "Diaz", "Evans", "Flores", "Garcia", "Gomez", "Gonzalez", "Hall",
  "Hernandez", "Hill", "Jackson", "Johnson", "Kim", "Lee", "Lopez", "Martin",
  "Martinez", "Miller", "Moore", "Morales", "Nguyen", "Ortiz", "Patel",
  "Perez", "Ramirez", "Reyes", "Rivera", "Robinson", "Rodriguez", "Sanchez",
  "Scott", "Smith", "Taylor", "Thompson", "Torres", "Walker", "White",
  "Williams", "Wilson", "Wright", "Young", "Zhang",
];
