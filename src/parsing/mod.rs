/*! Record parsing

Turns raw dataset records into [crate::data::TripleSet]s:
- [mr] parses E2E-style meaning representations (`name[The Eagle], food[French]`),
  inferring the subject from the attributes.
- [structured] parses records that already hold explicit `subject | predicate | object` strings.
!*/
pub mod mr;
pub mod structured;
