// src/store/seed.rs

use std::path::Path;

use serde::Deserialize;

use crate::{
    error::AppError,
    models::{
        exercise::{CreateExerciseRequest, TestCase},
        lesson::CreateLessonRequest,
    },
};

/// Flat seed records, loaded once at startup in file order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub lessons: Vec<CreateLessonRequest>,
    #[serde(default)]
    pub exercises: Vec<CreateExerciseRequest>,
}

impl CatalogSeed {
    /// Reads a JSON seed file of the form `{ "lessons": [...], "exercises": [...] }`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let seed = serde_json::from_str::<CatalogSeed>(&raw)?;
        Ok(seed)
    }
}

fn test_cases(pairs: &[(&str, &str)]) -> Vec<TestCase> {
    pairs
        .iter()
        .map(|(input, expected)| TestCase {
            input: input.to_string(),
            expected: expected.to_string(),
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in course: four lessons on Java conditionals, one exercise each.
pub fn builtin() -> CatalogSeed {
    let lessons = vec![
        CreateLessonRequest {
            title: "Condicionales en Java: If-Else".into(),
            slug: "condicionales-if-else".into(),
            description: "Aprende a usar estructuras condicionales if-else en Java.".into(),
            content: IF_ELSE_CONTENT.into(),
            order: Some(1),
            level: "Principiante".into(),
            category: "Fundamentos".into(),
        },
        CreateLessonRequest {
            title: "Condicionales if-else-if".into(),
            slug: "condicionales-if-else-if".into(),
            description: "Aprende a usar múltiples condiciones con if-else-if en Java.".into(),
            content: IF_ELSE_IF_CONTENT.into(),
            order: Some(2),
            level: "Principiante".into(),
            category: "Fundamentos".into(),
        },
        CreateLessonRequest {
            title: "Operadores lógicos en condicionales".into(),
            slug: "operadores-logicos".into(),
            description: "Aprende a combinar condiciones usando operadores lógicos &&, || y ! en Java."
                .into(),
            content: LOGICAL_OPERATORS_CONTENT.into(),
            order: Some(3),
            level: "Principiante".into(),
            category: "Fundamentos".into(),
        },
        CreateLessonRequest {
            title: "Switch-case en Java".into(),
            slug: "switch-case".into(),
            description:
                "Aprende a usar la estructura switch-case como alternativa a múltiples if-else."
                    .into(),
            content: SWITCH_CASE_CONTENT.into(),
            order: Some(4),
            level: "Principiante".into(),
            category: "Fundamentos".into(),
        },
    ];

    let exercises = vec![
        CreateExerciseRequest {
            title: "Clasificación por edad".into(),
            description:
                "Implementa un programa que clasifique a las personas según su edad en tres categorías."
                    .into(),
            instructions: AGE_INSTRUCTIONS.into(),
            starting_code: AGE_STARTING_CODE.into(),
            solution_code: AGE_SOLUTION.into(),
            hints: strings(&[
                "Primero verifica si la edad es menor que 18",
                "Luego verifica si la edad es mayor o igual que 65",
                "El caso restante debe ser para edades entre 18 y 64",
            ]),
            lesson_id: 1,
            test_cases: test_cases(&[
                ("15", "Es menor de edad"),
                ("35", "Es adulto"),
                ("70", "Es adulto mayor"),
            ]),
            order: Some(1),
        },
        CreateExerciseRequest {
            title: "Clasificación de calificaciones".into(),
            description: "Implementa un programa que clasifique calificaciones según una escala."
                .into(),
            instructions: GRADE_INSTRUCTIONS.into(),
            starting_code: GRADE_STARTING_CODE.into(),
            solution_code: GRADE_SOLUTION.into(),
            hints: strings(&[
                "Primero verifica si la calificación está en el rango válido (0-100)",
                "Organiza tus condiciones de mayor a menor para simplificar la lógica",
                "Recuerda manejar el caso de calificaciones inválidas",
            ]),
            lesson_id: 2,
            test_cases: test_cases(&[
                ("95", "A"),
                ("83", "B"),
                ("75", "C"),
                ("65", "D"),
                ("45", "F"),
                ("120", "Calificación inválida"),
            ]),
            order: Some(1),
        },
        CreateExerciseRequest {
            title: "Verificación de elegibilidad".into(),
            description: "Implementa un programa que determine si alguien es elegible para un préstamo."
                .into(),
            instructions: LOAN_INSTRUCTIONS.into(),
            starting_code: LOAN_STARTING_CODE.into(),
            solution_code: LOAN_SOLUTION.into(),
            hints: strings(&[
                "Agrupa las primeras tres condiciones con &&",
                "Combina ese grupo con la condición del garante usando ||",
                "Usa paréntesis para asegurar el orden correcto de evaluación",
            ]),
            lesson_id: 3,
            test_cases: test_cases(&[
                ("20\n3000\ntrue\nfalse", "Es elegible para el préstamo"),
                ("17\n3000\ntrue\nfalse", "No es elegible para el préstamo"),
                ("25\n1500\ntrue\nfalse", "No es elegible para el préstamo"),
                ("30\n3000\nfalse\nfalse", "No es elegible para el préstamo"),
                ("17\n1000\nfalse\ntrue", "Es elegible para el préstamo"),
            ]),
            order: Some(1),
        },
        CreateExerciseRequest {
            title: "Conversor de días".into(),
            description:
                "Implementa un programa que convierta un número de día a su nombre usando switch-case."
                    .into(),
            instructions: DAYS_INSTRUCTIONS.into(),
            starting_code: DAYS_STARTING_CODE.into(),
            solution_code: DAYS_SOLUTION.into(),
            hints: strings(&[
                "Usa la variable numeroDia como expresión en el switch",
                "Cada case debe representar un día de la semana",
                "No olvides usar break después de cada case",
                "Usa default para manejar números inválidos",
            ]),
            lesson_id: 4,
            test_cases: test_cases(&[
                ("1", "Lunes"),
                ("3", "Miércoles"),
                ("6", "Sábado"),
                ("10", "Día inválido"),
            ]),
            order: Some(1),
        },
    ];

    CatalogSeed { lessons, exercises }
}

const IF_ELSE_CONTENT: &str = r#"# Estructuras Condicionales If-Else

Las estructuras condicionales permiten que tu código tome decisiones basadas en condiciones específicas.

## ¿Qué son las condicionales?

En Java, la estructura básica es la sentencia `if`:

```java
if (condición) {
    // Código que se ejecuta si la condición es verdadera
} else {
    // Código que se ejecuta si la condición es falsa
}
```

La **condición** debe evaluarse a un valor booleano (`true` o `false`).

## Ejemplo práctico

```java
int numero = 10;

if (numero > 0) {
    System.out.println("El número es positivo");
} else if (numero < 0) {
    System.out.println("El número es negativo");
} else {
    System.out.println("El número es cero");
}
```

## Consejos

- Usa llaves `{ }` incluso para bloques de una sola línea.
- No anides más de 3 niveles de `if` para mantener la legibilidad.
- Si una condición es difícil de leer, divídela en variables con nombres descriptivos."#;

const IF_ELSE_IF_CONTENT: &str = r#"# Condicionales if-else-if

Cuando necesitas evaluar múltiples condiciones, puedes encadenar `else if`:

```java
if (condición1) {
    // condición1 es verdadera
} else if (condición2) {
    // condición1 es falsa y condición2 es verdadera
} else {
    // todas las condiciones anteriores son falsas
}
```

## Ejemplo: Calificaciones

```java
int calificacion = 85;

if (calificacion >= 90) {
    System.out.println("A - Excelente");
} else if (calificacion >= 80) {
    System.out.println("B - Muy bien");
} else if (calificacion >= 70) {
    System.out.println("C - Bien");
} else {
    System.out.println("F - Reprobado");
}
```

## Consideraciones importantes

- Las condiciones se evalúan en orden, de arriba hacia abajo.
- La ejecución se detiene en la primera condición verdadera.
- El bloque `else` es opcional."#;

const LOGICAL_OPERATORS_CONTENT: &str = r#"# Operadores lógicos en condicionales

Java proporciona tres operadores lógicos principales:

- **&&** (Y lógico): verdadero solo si ambas condiciones son verdaderas.
- **||** (O lógico): verdadero si al menos una condición es verdadera.
- **!** (NO lógico): invierte el valor de la condición.

## Ejemplo

```java
int edad = 25;
boolean tieneLicencia = true;

if (edad >= 18 && tieneLicencia) {
    System.out.println("Puede conducir");
} else {
    System.out.println("No puede conducir");
}
```

## Orden de evaluación

1. ! (NO lógico)
2. && (Y lógico)
3. || (O lógico)

Usa paréntesis para controlar el orden de evaluación cuando sea necesario."#;

const SWITCH_CASE_CONTENT: &str = r#"# Switch-case en Java

La estructura `switch` es una alternativa a múltiples sentencias `if-else-if` cuando se compara una variable con varios valores posibles.

```java
switch (dia) {
    case 1:
        nombreDia = "Lunes";
        break;
    case 2:
        nombreDia = "Martes";
        break;
    default:
        nombreDia = "Día inválido";
}
```

## La palabra clave `break`

Sin `break`, la ejecución continúa al siguiente caso ("fall-through").

## El bloque `default`

Se ejecuta cuando ningún caso coincide, igual que el `else` final de una cadena `if-else-if`.

## Switch mejorado (Java 14+)

```java
String nombreDia = switch (dia) {
    case 1 -> "Lunes";
    case 2 -> "Martes";
    default -> "Día inválido";
};
```"#;

const AGE_INSTRUCTIONS: &str = "Clasifica a las personas según su edad en tres categorías:

- Menores de edad (menos de 18 años)
- Adultos (entre 18 y 64 años)
- Adultos mayores (65 años o más)

Necesitarás una estructura if-else if-else, operadores relacionales y System.out.println().";

const AGE_STARTING_CODE: &str = r#"import java.util.Scanner;

public class Main {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.println("Ingresa la edad de la persona:");
        int edad = scanner.nextInt();

        // "Es menor de edad" si la edad es menor a 18
        // "Es adulto" si la edad está entre 18 y 64
        // "Es adulto mayor" si la edad es 65 o mayor

        // Tu código aquí:


        scanner.close();
    }
}"#;

const AGE_SOLUTION: &str = r#"import java.util.Scanner;

public class Main {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.println("Ingresa la edad de la persona:");
        int edad = scanner.nextInt();

        if (edad < 18) {
            System.out.println("Es menor de edad");
        } else if (edad >= 65) {
            System.out.println("Es adulto mayor");
        } else {
            System.out.println("Es adulto");
        }

        scanner.close();
    }
}"#;

const GRADE_INSTRUCTIONS: &str = "Clasifica calificaciones según la siguiente escala:

- A: 90-100
- B: 80-89
- C: 70-79
- D: 60-69
- F: 0-59

Los valores fuera del rango 0-100 deben imprimir \"Calificación inválida\".";

const GRADE_STARTING_CODE: &str = r#"import java.util.Scanner;

public class Main {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.println("Ingresa la calificación (0-100):");
        int calificacion = scanner.nextInt();

        // Imprime la letra correspondiente a la calificación

        // Tu código aquí:


        scanner.close();
    }
}"#;

const GRADE_SOLUTION: &str = r#"import java.util.Scanner;

public class Main {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.println("Ingresa la calificación (0-100):");
        int calificacion = scanner.nextInt();

        if (calificacion >= 0 && calificacion <= 100) {
            if (calificacion >= 90) {
                System.out.println("A");
            } else if (calificacion >= 80) {
                System.out.println("B");
            } else if (calificacion >= 70) {
                System.out.println("C");
            } else if (calificacion >= 60) {
                System.out.println("D");
            } else {
                System.out.println("F");
            }
        } else {
            System.out.println("Calificación inválida");
        }

        scanner.close();
    }
}"#;

const LOAN_INSTRUCTIONS: &str = "Determina si una persona es elegible para un préstamo:

- Tiene al menos 18 años
- Y un ingreso mensual de al menos $2000
- Y un buen historial de crédito
- O tiene un garante

Usa && y ||, y paréntesis para controlar el orden de evaluación.";

const LOAN_STARTING_CODE: &str = r#"import java.util.Scanner;

public class Main {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.println("Ingresa la edad:");
        int edad = scanner.nextInt();

        System.out.println("Ingresa el ingreso mensual:");
        double ingreso = scanner.nextDouble();

        System.out.println("¿Tiene buen historial de crédito? (true/false):");
        boolean buenHistorial = scanner.nextBoolean();

        System.out.println("¿Tiene garante? (true/false):");
        boolean tieneGarante = scanner.nextBoolean();

        // Tu código aquí:


        scanner.close();
    }
}"#;

const LOAN_SOLUTION: &str = r#"import java.util.Scanner;

public class Main {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.println("Ingresa la edad:");
        int edad = scanner.nextInt();

        System.out.println("Ingresa el ingreso mensual:");
        double ingreso = scanner.nextDouble();

        System.out.println("¿Tiene buen historial de crédito? (true/false):");
        boolean buenHistorial = scanner.nextBoolean();

        System.out.println("¿Tiene garante? (true/false):");
        boolean tieneGarante = scanner.nextBoolean();

        boolean esElegible = (edad >= 18 && ingreso >= 2000 && buenHistorial) || tieneGarante;

        if (esElegible) {
            System.out.println("Es elegible para el préstamo");
        } else {
            System.out.println("No es elegible para el préstamo");
        }

        scanner.close();
    }
}"#;

const DAYS_INSTRUCTIONS: &str = "Convierte un número del 1 al 7 en el nombre del día de la semana (1 - Lunes ... 7 - Domingo).

Para cualquier otro número imprime \"Día inválido\". Usa una estructura switch-case.";

const DAYS_STARTING_CODE: &str = r#"import java.util.Scanner;

public class Main {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.println("Ingresa un número del 1 al 7:");
        int numeroDia = scanner.nextInt();

        // Usa un switch-case para convertir el número a nombre del día

        // Tu código aquí:


        scanner.close();
    }
}"#;

const DAYS_SOLUTION: &str = r#"import java.util.Scanner;

public class Main {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.println("Ingresa un número del 1 al 7:");
        int numeroDia = scanner.nextInt();

        switch (numeroDia) {
            case 1:
                System.out.println("Lunes");
                break;
            case 2:
                System.out.println("Martes");
                break;
            case 3:
                System.out.println("Miércoles");
                break;
            case 4:
                System.out.println("Jueves");
                break;
            case 5:
                System.out.println("Viernes");
                break;
            case 6:
                System.out.println("Sábado");
                break;
            case 7:
                System.out.println("Domingo");
                break;
            default:
                System.out.println("Día inválido");
        }

        scanner.close();
    }
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ContentStore;

    #[test]
    fn builtin_seed_loads() {
        let store = ContentStore::from_seed(builtin()).unwrap();
        let slugs: Vec<String> = store.get_lessons().into_iter().map(|l| l.slug).collect();
        assert_eq!(
            slugs,
            vec![
                "condicionales-if-else",
                "condicionales-if-else-if",
                "operadores-logicos",
                "switch-case"
            ]
        );
        for lesson_id in 1..=4 {
            assert_eq!(store.get_exercises(lesson_id).len(), 1);
        }
    }

    #[test]
    fn seed_file_uses_camel_case_records() {
        let raw = r#"{
            "lessons": [{
                "title": "Intro", "slug": "intro", "description": "d",
                "content": "c", "level": "Principiante", "category": "Fundamentos"
            }],
            "exercises": [{
                "title": "E", "description": "d", "instructions": "i",
                "startingCode": "", "solutionCode": "System.out.println(1);",
                "lessonId": 1, "testCases": [{"input": "", "expected": "1"}]
            }]
        }"#;
        let seed: CatalogSeed = serde_json::from_str(raw).unwrap();
        let store = ContentStore::from_seed(seed).unwrap();
        let exercise = store.get_exercise(1).unwrap();
        assert_eq!(exercise.order, 1);
        assert_eq!(exercise.test_cases[0].expected, "1");
        assert_eq!(store.get_lesson(1).unwrap().order, 1);
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let err = CatalogSeed::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, AppError::InternalServerError(_)));
    }
}
