//! Embedded question bank used to populate an empty store.

use crate::models::Question;

fn entry(
    id: i64,
    version: &str,
    category: &str,
    text: &str,
    options: [&str; 4],
    correct_index: usize,
    explanation: &str,
) -> Question {
    Question {
        id,
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
        explanation: explanation.to_string(),
        version: version.to_string(),
        category: category.to_string(),
    }
}

pub fn question_bank() -> Vec<Question> {
    vec![
        entry(
            1,
            "17",
            "Language Features",
            "What is a sealed class in Java 17?",
            [
                "A class that cannot be instantiated",
                "A class that restricts which classes can extend it",
                "A class that is automatically serializable",
                "A class that can only be used in interfaces",
            ],
            1,
            "Sealed classes (and interfaces) restrict which other classes or interfaces may extend or implement them. This is a preview feature in Java 15 and became a standard feature in Java 17.",
        ),
        entry(
            2,
            "17",
            "Language Features",
            "Which feature was finalized in Java 17?",
            [
                "Pattern matching for switch",
                "Records",
                "Text blocks",
                "All of the above",
            ],
            3,
            "Java 17 (LTS) finalized several features including Records, Pattern matching for switch, and Text blocks that were previously in preview.",
        ),
        entry(
            3,
            "17",
            "Language Features",
            "What is the purpose of a record in Java 17?",
            [
                "To store database records",
                "To create immutable data carriers with less boilerplate",
                "To record method calls",
                "To create audio recordings",
            ],
            1,
            "Records are a special kind of class in Java that are designed to be transparent carriers for immutable data. They automatically generate constructors, getters, equals(), hashCode(), and toString().",
        ),
        entry(
            4,
            "18",
            "APIs",
            "What is the Simple Web Server introduced in Java 18?",
            [
                "A full-featured web server like Tomcat",
                "A minimal HTTP server for prototyping and testing",
                "A web server for production use",
                "A replacement for Apache HTTP Server",
            ],
            1,
            "Java 18 introduced jwebserver, a simple command-line tool to start a minimal web server that serves static files. It's intended for prototyping, testing, and ad-hoc coding.",
        ),
        entry(
            5,
            "18",
            "APIs",
            "What does UTF-8 by default mean in Java 18?",
            [
                "All strings are UTF-8 encoded",
                "The default charset for the standard Java APIs is UTF-8",
                "Files are automatically saved as UTF-8",
                "Network protocols use UTF-8",
            ],
            1,
            "Java 18 changed the default charset for the standard Java APIs from the platform default to UTF-8, ensuring consistent behavior across different platforms.",
        ),
        entry(
            6,
            "19",
            "Concurrency",
            "What are Virtual Threads (Project Loom) in Java 19?",
            [
                "Threads that run in virtual machines",
                "Lightweight threads managed by the JVM",
                "Threads that can only run virtual methods",
                "Threads for virtual reality applications",
            ],
            1,
            "Virtual threads are lightweight threads that are scheduled by the Java virtual machine rather than the operating system. They dramatically reduce the effort of writing, maintaining, and observing high-throughput concurrent applications.",
        ),
        entry(
            7,
            "19",
            "Language Features",
            "What is Pattern Matching for switch expressions in Java 19?",
            [
                "Using regex patterns in switch",
                "Matching patterns and extracting components in switch statements",
                "Switching between design patterns",
                "Pattern matching for file paths",
            ],
            1,
            "Pattern matching for switch allows you to match patterns and extract components from objects directly in switch expressions and statements, making code more concise and readable.",
        ),
        entry(
            8,
            "20",
            "Concurrency",
            "What is Scoped Values in Java 20?",
            [
                "Values scoped to a method",
                "Immutable data that can be shared within and across threads",
                "Values with limited visibility",
                "Database scoped values",
            ],
            1,
            "Scoped Values (preview) enable the sharing of immutable data within and across threads. They are preferred to thread-local variables, especially when using virtual threads.",
        ),
        entry(
            9,
            "20",
            "Language Features",
            "What does Record Patterns allow in Java 20?",
            [
                "Pattern matching on record components",
                "Recording method patterns",
                "Patterns for database records",
                "Recording design patterns",
            ],
            0,
            "Record Patterns (preview) extend pattern matching to deconstruct record values, allowing you to match patterns and extract components from records directly.",
        ),
        entry(
            10,
            "21",
            "General",
            "What is the main feature of Java 21 (LTS)?",
            [
                "Virtual threads are finalized",
                "Pattern matching is finalized",
                "Sequenced Collections are introduced",
                "All of the above",
            ],
            3,
            "Java 21 is an LTS release that finalizes Virtual Threads, Pattern Matching for switch, and introduces Sequenced Collections, among other features.",
        ),
        entry(
            11,
            "21",
            "Collections",
            "What are Sequenced Collections in Java 21?",
            [
                "Collections that can only store sequences",
                "New interfaces for collections with a defined encounter order",
                "Collections for DNA sequences",
                "Collections that sequence operations",
            ],
            1,
            "Sequenced Collections introduce new interfaces (SequencedSet, SequencedCollection, SequencedMap) that define collections with a well-defined encounter order, supporting operations at both ends.",
        ),
        entry(
            12,
            "21",
            "Language Features",
            "What does String Templates (Preview) allow in Java 21?",
            [
                "Templating strings with placeholders",
                "String interpolation with embedded expressions",
                "Creating string templates from files",
                "Template method pattern for strings",
            ],
            1,
            "String Templates (preview) enable string interpolation by embedding expressions in template strings, making it easier to create strings that include computed values.",
        ),
        entry(
            13,
            "17",
            "Language Features",
            "What is the instanceof pattern matching introduced in Java 17?",
            [
                "Using instanceof with type casting",
                "Combining instanceof checks with variable binding",
                "Pattern matching for instance variables",
                "Matching instance methods",
            ],
            1,
            "Pattern matching for instanceof allows you to combine type checking and variable binding in a single expression, eliminating the need for explicit casting after instanceof checks.",
        ),
        entry(
            14,
            "19",
            "Advanced",
            "What is the Foreign Function & Memory API in Java 19?",
            [
                "API for foreign key constraints",
                "API for calling native code and managing off-heap memory",
                "API for foreign exchange rates",
                "API for internationalization",
            ],
            1,
            "The Foreign Function & Memory API (preview) enables Java programs to interoperate with code and data outside of the Java runtime, allowing calls to native libraries and management of native memory.",
        ),
        entry(
            15,
            "19",
            "Concurrency",
            "What does Structured Concurrency (Preview) provide in Java 19?",
            [
                "Structured programming for concurrency",
                "A structured approach to managing multiple tasks running in different threads",
                "Concurrency with data structures",
                "Structured error handling for threads",
            ],
            1,
            "Structured Concurrency (preview) provides a structured approach to managing multiple tasks running in different threads, treating groups of related tasks as a single unit of work.",
        ),
        entry(
            16,
            "Core",
            "Core Concepts",
            "What is Java?",
            [
                "A low-level programming language",
                "A high-level, object-oriented programming language designed to run on any platform",
                "A database management system",
                "A web browser",
            ],
            1,
            "Java is a high-level, class-based, object-oriented programming language designed to have as few implementation dependencies as possible. It follows the 'write once, run anywhere' (WORA) principle.",
        ),
        entry(
            17,
            "Core",
            "Core Concepts",
            "Explain the JDK, JRE, and JVM.",
            [
                "They are all the same thing",
                "JDK contains JRE, JRE contains JVM. JDK is for development, JRE is for running applications, JVM executes bytecode",
                "JVM is the largest, containing both JDK and JRE",
                "They are unrelated components",
            ],
            1,
            "JVM (Java Virtual Machine) executes Java bytecode. JRE (Java Runtime Environment) contains JVM plus libraries needed to run Java applications. JDK (Java Development Kit) contains JRE plus development tools like compiler and debugger.",
        ),
        entry(
            18,
            "Core",
            "Core Concepts",
            "What are variables in Java?",
            [
                "Methods that store data",
                "Containers for storing data values with a specific type",
                "Classes that hold multiple values",
                "Functions that return values",
            ],
            1,
            "Variables are containers for storing data values. In Java, each variable must be declared with a data type that designates the type and quantity of value it can hold. Java is statically typed.",
        ),
        entry(
            19,
            "Core",
            "Core Concepts",
            "What is typecasting in Java?",
            [
                "Converting a variable from one type to another",
                "Creating new types",
                "Type checking at runtime",
                "Type erasure",
            ],
            0,
            "Typecasting is the process of converting a variable from one type to another. Widening casting (implicit) converts smaller to larger types automatically. Narrowing casting (explicit) requires explicit conversion from larger to smaller types.",
        ),
        entry(
            20,
            "Core",
            "Core Concepts",
            "How do you declare an array in Java?",
            [
                "array int[] = new int[10]",
                "int[] myArray = new int[10]",
                "int myArray = array[10]",
                "new array int[10]",
            ],
            1,
            "An array is declared using: type[] arrayName = new type[size]. For example: int[] myIntArray = new int[10] declares an array of integers with 10 elements.",
        ),
        entry(
            21,
            "Core",
            "Core Concepts",
            "What is the signature of the main method in Java?",
            [
                "public void main(String[] args)",
                "public static void main(String[] args)",
                "static void main(String args)",
                "public static main(String[] args)",
            ],
            1,
            "The main method is the entry point for any Java program. It must be public (accessible), static (can be called without creating an object), void (returns nothing), and accept a String array as parameter.",
        ),
        entry(
            22,
            "Core",
            "Core Concepts",
            "What are literals in Java?",
            [
                "Variables that cannot be changed",
                "Fixed values assigned to variables, like 100, 'A', or \"Hello\"",
                "Methods that return constant values",
                "Classes that represent constants",
            ],
            1,
            "Literals refer to the fixed values assigned to variables in Java. Examples include: 100 (integer), -90 (integer), 3.14F (float), 'A' (character), and \"Hello\" (string).",
        ),
        entry(
            23,
            "Core",
            "Core Concepts",
            "What is a constructor in Java?",
            [
                "A method that returns a value",
                "A block of code called when an instance of an object is created, with the same name as the class",
                "A static method that initializes the class",
                "A method that destroys objects",
            ],
            1,
            "A constructor in Java is a block of code similar to a method that's called when an instance of an object is created. Unlike methods, constructors have no explicit return type and have the same name as the class itself.",
        ),
        entry(
            24,
            "Core",
            "Core Concepts",
            "What is a package in Java?",
            [
                "A compressed file format",
                "A namespace that organizes related classes and interfaces",
                "A method for packaging applications",
                "A deployment unit",
            ],
            1,
            "A package in Java is a namespace that organizes a set of related classes and interfaces. Conceptually, you can think of packages as being similar to different folders on your computer.",
        ),
        entry(
            25,
            "Core",
            "Core Concepts",
            "What is Object-Oriented Programming?",
            [
                "Programming with objects only",
                "A programming paradigm based on objects containing data (fields) and code (methods)",
                "Programming without classes",
                "A database programming model",
            ],
            1,
            "Object-oriented programming (OOP) is a programming paradigm based on the concept of 'objects', which can contain data in the form of fields (attributes or properties) and code in the form of procedures (methods).",
        ),
        entry(
            26,
            "Core",
            "Core Concepts",
            "What are the main principles of OOP?",
            [
                "Variables, Methods, Classes, Objects",
                "Encapsulation, Abstraction, Inheritance, Polymorphism",
                "Public, Private, Protected, Static",
                "Compile, Run, Debug, Deploy",
            ],
            1,
            "The four main principles of OOP are: Encapsulation (binding data and methods, hiding implementation), Abstraction (hiding complexity, exposing simple interface), Inheritance (acquiring properties from parent class), and Polymorphism (one interface, multiple implementations).",
        ),
        entry(
            27,
            "Core",
            "Core Concepts",
            "What is inheritance in Java?",
            [
                "Copying code from one class to another",
                "A mechanism where one object acquires all properties and behaviors of a parent object",
                "Sharing variables between classes",
                "Importing classes from other packages",
            ],
            1,
            "Inheritance in Java is a mechanism where one object acquires all the properties and behaviors of a parent object. It is an important part of OOPs (Object-Oriented programming systems) and promotes code reusability.",
        ),
        entry(
            28,
            "Core",
            "Core Concepts",
            "What is an interface in Java?",
            [
                "A class that cannot be instantiated",
                "A reference type similar to a class that contains only constants, method signatures, default methods, and static methods",
                "A graphical user interface",
                "A connection between two classes",
            ],
            1,
            "An interface in Java is a reference type, similar to a class, that can contain only constants, method signatures, default methods, static methods, and nested types. Interfaces cannot contain instance fields. Methods in interfaces are abstract by default.",
        ),
        entry(
            29,
            "Core",
            "Core Concepts",
            "What is the difference between abstract classes and interfaces?",
            [
                "There is no difference",
                "Abstract classes can have both abstract and non-abstract methods; interfaces typically contain abstract methods only (plus default/static from Java 8+)",
                "Interfaces can be instantiated; abstract classes cannot",
                "Abstract classes are faster than interfaces",
            ],
            1,
            "Abstract classes can have both abstract and non-abstract methods and are used to provide a base for subclasses. Interfaces typically contain abstract methods only (though Java 8+ allows default and static methods). A class can implement multiple interfaces but extend only one class.",
        ),
        entry(
            30,
            "Core",
            "Core Concepts",
            "What is polymorphism in Java?",
            [
                "Having multiple variables with the same name",
                "The ability of an object to take on many forms, often when a parent class reference refers to a child class object",
                "Having multiple classes with the same name",
                "Using multiple inheritance",
            ],
            1,
            "Polymorphism in Java is the ability of an object to take on many forms. Most commonly, it is when a parent class reference is used to refer to a child class object. This allows one interface to be used for a general class of actions.",
        ),
        entry(
            31,
            "Core",
            "Core Concepts",
            "What is method overriding?",
            [
                "Having multiple methods with the same name but different parameters",
                "A subclass providing a specific implementation of a method already provided by its superclass",
                "Calling a method multiple times",
                "Overloading a method with too many parameters",
            ],
            1,
            "Method overriding, in object-oriented programming, is a language feature that allows a subclass or child class to provide a specific implementation of a method that is already provided by one of its superclasses or parent classes.",
        ),
        entry(
            32,
            "Core",
            "Core Concepts",
            "What is method overloading?",
            [
                "A subclass providing a different implementation of a method",
                "A feature allowing a class to have multiple methods with the same name but different parameter lists",
                "Calling a method recursively",
                "Making a method too complex",
            ],
            1,
            "Method overloading is a feature that allows a class to have more than one method having the same name, if their parameter lists are different. It is related to compile-time (or static) polymorphism.",
        ),
        entry(
            33,
            "Core",
            "APIs",
            "What is the difference between String, StringBuilder, and StringBuffer?",
            [
                "They are all the same",
                "String is immutable; StringBuilder is mutable and not thread-safe; StringBuffer is mutable and thread-safe",
                "StringBuffer is immutable; StringBuilder is thread-safe",
                "String is mutable; StringBuilder and StringBuffer are immutable",
            ],
            1,
            "String is immutable - once created, its value cannot be changed. StringBuilder is mutable and not thread-safe, making it faster for single-threaded operations. StringBuffer is mutable and thread-safe due to synchronized methods, but slower than StringBuilder.",
        ),
        entry(
            34,
            "Core",
            "APIs",
            "What is the difference between == and .equals() in Java?",
            [
                "They are the same",
                "== compares references; .equals() compares content/values (when overridden)",
                "== compares values; .equals() compares references",
                "== is for primitives; .equals() is for objects",
            ],
            1,
            "The == operator compares references, checking if two references point to the same object. The .equals() method compares the content of objects for equality. The default implementation compares references, but many classes override it to compare values.",
        ),
        entry(
            35,
            "Core",
            "APIs",
            "What is the purpose of the final keyword in Java?",
            [
                "To mark the last element in a collection",
                "final variable: cannot be changed; final method: cannot be overridden; final class: cannot be subclassed",
                "To indicate the end of a program",
                "To make variables public",
            ],
            1,
            "The final keyword has different meanings: final variable - value cannot be changed once assigned; final method - cannot be overridden by subclasses; final class - cannot be subclassed (extended).",
        ),
        entry(
            36,
            "Core",
            "Core Concepts",
            "What is an exception in Java?",
            [
                "A compile-time error",
                "An event that disrupts the normal flow of the program's instructions",
                "A warning message",
                "A syntax error",
            ],
            1,
            "An exception is an event that disrupts the normal flow of the program's instructions. When an exception occurs, an exception object is created and thrown in the method that caused it.",
        ),
        entry(
            37,
            "Core",
            "Core Concepts",
            "What is the difference between checked and unchecked exceptions?",
            [
                "There is no difference",
                "Checked exceptions must be handled at compile time; unchecked exceptions (RuntimeException) don't need to be declared",
                "Unchecked exceptions must be handled; checked exceptions don't",
                "Checked exceptions are errors; unchecked are warnings",
            ],
            1,
            "Checked exceptions must be caught or declared in the method signature using throws. They are checked at compile time. Unchecked exceptions (RuntimeException and its subclasses) don't need to be declared and are checked at runtime.",
        ),
        entry(
            38,
            "Core",
            "Core Concepts",
            "What is the try-catch-finally block?",
            [
                "A loop structure",
                "A mechanism to handle exceptions: try (code that may throw), catch (handle exception), finally (always executes)",
                "A conditional statement",
                "A method declaration",
            ],
            1,
            "The try-catch-finally block is used for exception handling. The try block contains code that might throw an exception. The catch block handles the exception. The finally block always executes, whether an exception occurs or not.",
        ),
        entry(
            39,
            "Core",
            "Core Concepts",
            "What is the throw keyword used for?",
            [
                "To throw away code",
                "To explicitly throw an exception",
                "To catch exceptions",
                "To ignore exceptions",
            ],
            1,
            "The throw keyword is used to explicitly throw an exception. You can throw either checked or unchecked exceptions. The throw statement requires a single argument: a throwable object.",
        ),
        entry(
            40,
            "Core",
            "Core Concepts",
            "What is the throws keyword used for?",
            [
                "To throw an exception",
                "To declare that a method might throw an exception",
                "To catch an exception",
                "To ignore exceptions",
            ],
            1,
            "The throws keyword is used in a method signature to declare that the method might throw one or more exceptions. It's used for checked exceptions that the method doesn't handle itself.",
        ),
        entry(
            41,
            "Core",
            "Collections",
            "What is the List interface in Java?",
            [
                "A class for storing arrays",
                "Part of the Collections Framework representing an ordered collection (sequence) with index-based access",
                "A method for listing files",
                "A database table",
            ],
            1,
            "The List interface is part of the Java Collections Framework and represents an ordered collection (also known as a sequence). The user can access elements by their integer index (position in the list), and search for elements in the list.",
        ),
        entry(
            42,
            "Core",
            "Collections",
            "What is the difference between ArrayList and LinkedList?",
            [
                "They are the same",
                "ArrayList uses dynamic array (fast random access, slow insertions/deletions); LinkedList uses doubly-linked list (fast insertions/deletions, slow random access)",
                "LinkedList is faster for all operations",
                "ArrayList cannot store objects",
            ],
            1,
            "ArrayList is a resizable-array implementation best for storing and accessing data. LinkedList is a doubly-linked list implementation better for operations that require frequent addition and removal of elements from any part of the list.",
        ),
        entry(
            43,
            "Core",
            "Collections",
            "What are Vector and Stack classes?",
            [
                "They don't exist in Java",
                "Vector is similar to ArrayList but synchronized; Stack extends Vector with stack operations",
                "They are the same as ArrayList",
                "Vector is for graphics; Stack is for networking",
            ],
            1,
            "Vector is similar to ArrayList, but it is synchronized (thread-safe). Stack extends Vector with five operations that allow a vector to be treated as a stack (LIFO - Last In First Out).",
        ),
        entry(
            44,
            "Core",
            "Collections",
            "What is the difference between Iterator and ListIterator?",
            [
                "They are the same",
                "Iterator traverses forward only; ListIterator can traverse both directions, modify list, and get current position",
                "ListIterator is only for arrays",
                "Iterator is faster than ListIterator",
            ],
            1,
            "Iterator can traverse the list in the forward direction only. ListIterator can traverse the list in either direction, modify the list during iteration, and obtain the iterator's current position in the list.",
        ),
        entry(
            45,
            "Core",
            "Concurrency",
            "What is a thread in Java?",
            [
                "A type of variable",
                "A lightweight process that allows concurrent execution of multiple parts of a program",
                "A collection class",
                "A method modifier",
            ],
            1,
            "A thread is a lightweight process that allows concurrent execution of multiple parts of a program. Threads share the same memory space, making communication between threads easier than between processes.",
        ),
        entry(
            46,
            "Core",
            "Concurrency",
            "What is the difference between Thread and Runnable?",
            [
                "They are the same",
                "Thread is a class; Runnable is an interface. Runnable is preferred as Java doesn't support multiple inheritance",
                "Runnable is a class; Thread is an interface",
                "Thread is faster than Runnable",
            ],
            1,
            "Thread is a class that implements Runnable. Runnable is an interface with a single run() method. Using Runnable is preferred because Java doesn't support multiple inheritance, so if you extend Thread, you can't extend another class.",
        ),
        entry(
            47,
            "Core",
            "Concurrency",
            "What is synchronization in Java?",
            [
                "Making code run faster",
                "A mechanism that ensures only one thread can access a shared resource at a time",
                "Synchronizing with a database",
                "Making methods static",
            ],
            1,
            "Synchronization is a mechanism that ensures only one thread can access a shared resource at a time. It prevents thread interference and consistency problems. It can be achieved using synchronized methods or synchronized blocks.",
        ),
        entry(
            48,
            "Core",
            "Concurrency",
            "What is the difference between wait() and sleep()?",
            [
                "They are the same",
                "wait() releases the lock and is called on an object; sleep() doesn't release the lock and is called on Thread",
                "sleep() releases the lock; wait() doesn't",
                "wait() is for threads; sleep() is for processes",
            ],
            1,
            "wait() is called on an object and releases the lock, allowing other threads to acquire it. sleep() is called on Thread and doesn't release any locks. wait() must be called from a synchronized context.",
        ),
        entry(
            49,
            "8",
            "APIs",
            "What is the Stream API in Java 8?",
            [
                "A way to read files",
                "A sequence of elements supporting sequential and parallel aggregate operations",
                "A networking API",
                "A database streaming API",
            ],
            1,
            "The Stream API in Java 8 provides a functional approach to processing collections of objects. It allows you to perform operations like filter, map, reduce, etc., on collections in a declarative way.",
        ),
        entry(
            50,
            "8",
            "APIs",
            "What is the difference between intermediate and terminal operations in Stream API?",
            [
                "They are the same",
                "Intermediate operations return streams and are lazy; terminal operations produce results and trigger execution",
                "Terminal operations return streams; intermediate operations produce results",
                "Intermediate operations are faster",
            ],
            1,
            "Intermediate operations (like filter, map) return a stream and are lazy - they don't execute until a terminal operation is called. Terminal operations (like collect, forEach) produce a result and trigger the execution of the stream pipeline.",
        ),
        entry(
            51,
            "8",
            "APIs",
            "What is the reduce operation in Stream API?",
            [
                "Reducing the size of a collection",
                "Combining all elements of a stream into a single result using a binary operator",
                "Removing elements from a stream",
                "Reducing memory usage",
            ],
            1,
            "The reduce operation combines all elements of the stream into a single result by applying a binary operator. This operation takes two parameters: an initial value (optional), and a binary operator function.",
        ),
        entry(
            52,
            "Core",
            "APIs",
            "What is JDBC?",
            [
                "A Java database",
                "Java Database Connectivity - an API that enables Java programs to execute SQL statements",
                "A Java development tool",
                "A Java compiler",
            ],
            1,
            "JDBC (Java Database Connectivity) is an API that enables Java programs to execute SQL statements. This allows Java applications to interact with any SQL-compliant database.",
        ),
        entry(
            53,
            "Core",
            "APIs",
            "What are the core components of JDBC?",
            [
                "Classes and methods only",
                "DriverManager, Driver, Connection, Statement, ResultSet, and SQLException",
                "Only Connection and Statement",
                "Database and tables",
            ],
            1,
            "The core components of JDBC include DriverManager (manages database drivers), Driver (interface for database drivers), Connection (represents a connection to a database), Statement (executes SQL queries), ResultSet (represents query results), and SQLException (handles database errors).",
        ),
        entry(
            54,
            "Core",
            "APIs",
            "What is the difference between Statement and PreparedStatement?",
            [
                "They are the same",
                "Statement is for simple queries with no parameters; PreparedStatement is for parameterized queries and better performance",
                "PreparedStatement is simpler than Statement",
                "Statement is only for SELECT queries",
            ],
            1,
            "Statement is used to execute a simple SQL query with no parameters. PreparedStatement is used for executing SQL statements multiple times or when you need to bind parameters to the query. PreparedStatement is precompiled and offers better performance and security.",
        ),
        entry(
            55,
            "Core",
            "APIs",
            "What is ResultSet in JDBC?",
            [
                "A database table",
                "A table of data representing a database result set generated by executing a query",
                "A SQL statement",
                "A database connection",
            ],
            1,
            "ResultSet is a table of data representing a database result set, which is generated by executing a statement that queries the database. It provides methods to navigate through the rows and retrieve column values.",
        ),
        entry(
            56,
            "Core",
            "APIs",
            "What is Connection Pooling?",
            [
                "A pool of database tables",
                "A technique to improve performance by reusing database connections instead of creating new ones",
                "A way to store connections in a pool",
                "A database backup method",
            ],
            1,
            "Connection pooling is a technique used to improve performance in applications that need to make calls to a database by reusing the connections instead of creating a new one each time. This reduces overhead and improves response time.",
        ),
        entry(
            57,
            "Core",
            "General",
            "What are primitive data types in Java?",
            [
                "int, float, String, Object",
                "byte, short, int, long, float, double, char, boolean - basic types that store actual values",
                "ArrayList, HashMap, String",
                "Classes and interfaces",
            ],
            1,
            "Primitive data types are the basic types: byte, short, int, long, float, double, char, and boolean. They store actual values (not references) and use less memory than objects. They cannot be null.",
        ),
        entry(
            58,
            "Core",
            "General",
            "What is the difference between primitives and objects in Java?",
            [
                "There is no difference",
                "Primitives store values and use less memory; objects store references, use more memory, can be null, and have methods",
                "Objects are faster than primitives",
                "Primitives can have methods",
            ],
            1,
            "Primitives store actual values and use less memory. Objects store references to memory locations, use more memory, can be null, and have methods. Primitives are generally faster to access and manipulate.",
        ),
        entry(
            59,
            "Core",
            "General",
            "What is garbage collection in Java?",
            [
                "Manual memory management",
                "Automatic memory management that reclaims memory occupied by objects that are no longer in use",
                "Collecting unused code",
                "A database operation",
            ],
            1,
            "Garbage collection is the automatic memory management process in Java. The JVM automatically identifies and removes objects that are no longer referenced, freeing up memory. Developers don't need to manually deallocate memory.",
        ),
        entry(
            60,
            "Core",
            "General",
            "What is the static keyword in Java?",
            [
                "A method that cannot be changed",
                "A keyword that makes a member belong to the class rather than instances, shared across all instances",
                "A constant value",
                "A method modifier for speed",
            ],
            1,
            "The static keyword makes a member (variable or method) belong to the class rather than to instances of the class. Static members are shared across all instances and can be accessed without creating an object.",
        ),
        entry(
            61,
            "Core",
            "General",
            "What is the this keyword in Java?",
            [
                "A reference to another object",
                "A reference to the current object instance",
                "A method name",
                "A class name",
            ],
            1,
            "The 'this' keyword is a reference to the current object instance. It can be used to refer to instance variables, call other constructors, or pass the current object as a parameter.",
        ),
        entry(
            62,
            "Core",
            "General",
            "What are access modifiers in Java?",
            [
                "public, private, protected, default - they control the visibility and accessibility of classes, methods, and variables",
                "static, final, abstract",
                "int, String, boolean",
                "try, catch, finally",
            ],
            0,
            "Access modifiers control the visibility and accessibility of classes, methods, and variables. public (accessible everywhere), private (only within the class), protected (within package and subclasses), and default/package-private (within the same package).",
        ),
        entry(
            63,
            "Core",
            "General",
            "What is the super keyword in Java?",
            [
                "A method that is superior",
                "A reference to the parent class, used to access parent class members and call parent class constructors",
                "A class modifier",
                "A variable type",
            ],
            1,
            "The 'super' keyword is a reference to the parent class. It can be used to access parent class members (variables and methods), call parent class constructors, and distinguish between parent and child class members with the same name.",
        ),
        entry(
            64,
            "Core",
            "General",
            "What is autoboxing and unboxing in Java?",
            [
                "Packing and unpacking boxes",
                "Automatic conversion between primitive types and their corresponding wrapper classes",
                "Converting between different number types",
                "A database operation",
            ],
            1,
            "Autoboxing is the automatic conversion of primitive types to their corresponding wrapper class objects (e.g., int to Integer). Unboxing is the automatic conversion of wrapper class objects to their primitive types (e.g., Integer to int).",
        ),
        entry(
            65,
            "Core",
            "General",
            "What is a wrapper class in Java?",
            [
                "A class that wraps other classes",
                "A class that wraps a primitive type in an object (e.g., Integer, Double, Boolean)",
                "A class for packaging",
                "A container class",
            ],
            1,
            "Wrapper classes are classes that wrap primitive types in objects. Examples include Integer (for int), Double (for double), Boolean (for boolean), Character (for char), etc. They allow primitives to be used in contexts that require objects.",
        ),
    ]
}
